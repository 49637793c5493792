use super::forbidden_keys::is_forbidden_key;
use super::issue::{IssueCode, ParseIssue};

/// Validates a single form key
///
/// # Arguments
/// * `key` - The raw key, exactly as received
///
/// # Returns
/// * `Ok(())` if the key can be used as-is
/// * `Err(ParseIssue)` carrying the key if it must be rejected
///
/// Accepted keys are used verbatim: no trimming, no case folding, and no
/// interpretation of brackets or dots.
pub fn validate_key(key: &str) -> Result<(), ParseIssue> {
    // Reserved names first, whatever the value
    if is_forbidden_key(key) {
        return Err(ParseIssue::new(IssueCode::ForbiddenKey, key));
    }

    if key.is_empty() {
        return Err(ParseIssue::new(IssueCode::InvalidKey, key));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_forbidden_keys() {
        for key in ["__proto__", "constructor", "prototype"] {
            let issue = validate_key(key).unwrap_err();
            assert_eq!(issue.code(), IssueCode::ForbiddenKey);
            assert_eq!(issue.key(), key);
            assert!(issue.path().is_empty());
            assert!(issue.message().contains(key));
        }
    }

    #[test]
    fn test_rejects_empty_key() {
        let issue = validate_key("").unwrap_err();
        assert_eq!(issue.code(), IssueCode::InvalidKey);
        assert_eq!(issue.key(), "");
        assert!(issue.path().is_empty());
        assert!(issue.message().contains("empty"));
    }

    #[test]
    fn test_accepts_plain_keys() {
        assert!(validate_key("username").is_ok());
        assert!(validate_key("123").is_ok());
    }

    #[test]
    fn test_accepts_structured_looking_keys_verbatim() {
        assert!(validate_key("user[name]").is_ok());
        assert!(validate_key("items[]").is_ok());
        assert!(validate_key("user.email").is_ok());
        assert!(validate_key("data[items][0][name]").is_ok());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        // Whitespace-only keys are not empty
        assert!(validate_key(" ").is_ok());
        assert!(validate_key("__proto__ ").is_ok());
    }

    #[test]
    fn test_verdict_is_stable() {
        for key in ["", "__proto__", "name"] {
            assert_eq!(validate_key(key), validate_key(key));
        }
    }
}
