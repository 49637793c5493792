use super::issue::{IssueCode, ParseIssue, ParseIssues};
use super::key_validator::validate_key;
use super::outcome::ParseOutcome;
use super::safe_form_data::SafeFormData;
use models::FormValue;

/// Parses ordered form entries into flat, validated data.
///
/// Each key is validated, then checked against the keys accepted so far in
/// this call. A rejected entry is dropped without looking at its value; a
/// repeated key keeps its first value and reports every later occurrence.
///
/// Any issue at all discards the data: the outcome is either every entry or
/// none of them.
///
/// ```
/// use services::{parse, IssueCode};
///
/// let outcome = parse([("name", "alice"), ("name", "bob")]);
/// assert!(outcome.data().is_none());
/// assert_eq!(outcome.issues()[0].code(), IssueCode::DuplicateKey);
/// ```
pub fn parse<I, K, V>(entries: I) -> ParseOutcome
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FormValue>,
{
    let mut issues: Vec<ParseIssue> = Vec::new();
    let mut data = SafeFormData::new();

    for (key, value) in entries {
        let key: String = key.into();

        if let Err(issue) = validate_key(&key) {
            issues.push(issue);
            continue;
        }

        if data.contains_key(&key) {
            issues.push(ParseIssue::new(IssueCode::DuplicateKey, key));
            continue;
        }

        data.insert(key, value.into());
    }

    // No partial success
    match ParseIssues::new(issues) {
        Some(issues) => ParseOutcome::Failure(issues),
        None => ParseOutcome::Success(data),
    }
}
