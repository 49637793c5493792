use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Why an entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// The key is structurally unusable (empty)
    InvalidKey,
    /// The key is one of the reserved prototype names
    ForbiddenKey,
    /// The key was already accepted earlier in the same form
    DuplicateKey,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidKey => "invalid_key",
            IssueCode::ForbiddenKey => "forbidden_key",
            IssueCode::DuplicateKey => "duplicate_key",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected form entry.
///
/// `path` is always empty: keys are never split into nested paths, the field
/// only exists so the shape lines up with structural validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    code: IssueCode,
    key: String,
}

impl ParseIssue {
    pub fn new(code: IssueCode, key: impl Into<String>) -> Self {
        Self {
            code,
            key: key.into(),
        }
    }

    pub fn code(&self) -> IssueCode {
        self.code
    }

    pub fn path(&self) -> &[String] {
        &[]
    }

    /// The offending key, verbatim
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn message(&self) -> String {
        match self.code {
            IssueCode::InvalidKey => "Key must not be empty".to_string(),
            IssueCode::ForbiddenKey => format!("Forbidden key detected: \"{}\"", self.key),
            IssueCode::DuplicateKey => format!("Duplicate key detected: \"{}\"", self.key),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Serialize for ParseIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParseIssue", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("path", self.path())?;
        state.serialize_field("key", &self.key)?;
        state.end()
    }
}

/// A non-empty, ordered list of issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssues(Vec<ParseIssue>);

impl ParseIssues {
    /// Returns `None` for an empty list
    pub fn new(issues: Vec<ParseIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self(issues))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> &ParseIssue {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseIssue> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ParseIssue] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ParseIssue> {
        self.0
    }

    /// Get a comma-separated list of all issue messages
    pub fn to_string_list(&self) -> String {
        self.0
            .iter()
            .map(ParseIssue::message)
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for ParseIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

impl std::error::Error for ParseIssues {}

impl<'a> IntoIterator for &'a ParseIssues {
    type Item = &'a ParseIssue;
    type IntoIter = std::slice::Iter<'a, ParseIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for ParseIssues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
