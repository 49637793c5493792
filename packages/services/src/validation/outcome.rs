use super::issue::{ParseIssue, ParseIssues};
use super::safe_form_data::SafeFormData;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Result of parsing a form: all of it, or none of it.
///
/// Serializes as `{ "data": {...}, "issues": [] }` on success and
/// `{ "data": null, "issues": [...] }` on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Success(SafeFormData),
    Failure(ParseIssues),
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success(_))
    }

    pub fn data(&self) -> Option<&SafeFormData> {
        match self {
            ParseOutcome::Success(data) => Some(data),
            ParseOutcome::Failure(_) => None,
        }
    }

    /// Empty on success
    pub fn issues(&self) -> &[ParseIssue] {
        match self {
            ParseOutcome::Success(_) => &[],
            ParseOutcome::Failure(issues) => issues.as_slice(),
        }
    }

    pub fn into_result(self) -> Result<SafeFormData, ParseIssues> {
        match self {
            ParseOutcome::Success(data) => Ok(data),
            ParseOutcome::Failure(issues) => Err(issues),
        }
    }
}

impl From<ParseOutcome> for Result<SafeFormData, ParseIssues> {
    fn from(outcome: ParseOutcome) -> Self {
        outcome.into_result()
    }
}

impl Serialize for ParseOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParseOutcome", 2)?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("issues", self.issues())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::issue::IssueCode;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let outcome = ParseOutcome::Success(SafeFormData::default());

        assert!(outcome.is_success());
        assert!(outcome.issues().is_empty());
        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({ "data": {}, "issues": [] }));
    }

    #[test]
    fn test_failure_shape() {
        let issues = ParseIssues::new(vec![ParseIssue::new(IssueCode::DuplicateKey, "a")]).unwrap();
        let outcome = ParseOutcome::Failure(issues);

        assert!(!outcome.is_success());
        assert!(outcome.data().is_none());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "data": null, "issues": [{ "code": "duplicate_key", "path": [], "key": "a" }] })
        );
    }

    #[test]
    fn test_into_result_propagates_issues() {
        fn require_form(outcome: ParseOutcome) -> Result<usize, Box<dyn std::error::Error>> {
            let data = outcome.into_result()?;
            Ok(data.len())
        }

        let issues = ParseIssues::new(vec![ParseIssue::new(IssueCode::InvalidKey, "")]).unwrap();
        let err = require_form(ParseOutcome::Failure(issues)).unwrap_err();
        assert_eq!(err.to_string(), "Key must not be empty");

        assert_eq!(require_form(ParseOutcome::Success(SafeFormData::default())).unwrap(), 0);
    }
}
