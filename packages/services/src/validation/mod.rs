pub mod forbidden_keys;
pub mod issue;
pub mod key_validator;
pub mod outcome;
pub mod parse;
pub mod safe_form_data;

// Re-export common types and functions
pub use forbidden_keys::{is_forbidden_key, FORBIDDEN_KEYS};
pub use issue::{IssueCode, ParseIssue, ParseIssues};
pub use key_validator::validate_key;
pub use outcome::ParseOutcome;
pub use parse::parse;
pub use safe_form_data::SafeFormData;
