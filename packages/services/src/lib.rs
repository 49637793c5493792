//! Boundary-focused parsing of multipart form entries.
//!
//! [`parse`] turns ordered, untrusted `(key, value)` entries into either a
//! flat [`SafeFormData`] or a non-empty list of [`ParseIssue`]s. Keys are
//! never interpreted, values are never coerced, and a single bad entry
//! rejects the whole form.

pub mod validation;

pub use models::{File, FormData, FormValue};
pub use validation::*;
