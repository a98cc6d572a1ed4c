//! Student record exposed by the roster.

use serde::{Deserialize, Serialize};

/// A first/last name pair.
///
/// Students carry no identifier of their own; they are addressed by their
/// position in the [`StudentRoster`](crate::domain::StudentRoster).
///
/// # Examples
/// ```
/// use roster::domain::Student;
///
/// let student = Student::new("Robb", "Stark");
/// let json = serde_json::to_string(&student).expect("serialise student");
/// assert_eq!(json, r#"{"firstName":"Robb","lastName":"Stark"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Student {
    first_name: String,
    last_name: String,
}

impl Student {
    /// Build a student from its name parts.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
}
