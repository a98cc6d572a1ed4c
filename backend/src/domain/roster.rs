//! In-memory student roster.
//!
//! The roster is built once at startup and never mutated afterwards, so it
//! can be shared across workers behind an `Arc` without locking. Lookups are
//! positional: the only identity a student has is its index.

use async_trait::async_trait;

use crate::domain::ports::StudentsQuery;
use crate::domain::{Error, Student};

const SEED: [(&str, &str); 4] = [
    ("Ayush", "Mathur"),
    ("Robb", "Stark"),
    ("Peter", "Griffin"),
    ("Nagato", "Uzumaki"),
];

/// Failure returned by [`StudentRoster::get`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterLookupError {
    /// The requested position lies outside `0..len`.
    #[error("index {index} is outside the roster of {len} students")]
    IndexOutOfRange {
        /// Requested position.
        index: i64,
        /// Number of students held.
        len: usize,
    },
}

/// Ordered, fixed-size collection of students.
///
/// ## Invariants
/// - A lookup succeeds exactly when `0 <= index < len()`.
///
/// # Examples
/// ```
/// use roster::domain::StudentRoster;
///
/// let roster = StudentRoster::seeded();
/// assert_eq!(roster.len(), 4);
/// assert_eq!(roster.get(0).expect("first").first_name(), "Ayush");
/// assert!(roster.get(-1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRoster {
    students: Vec<Student>,
}

impl StudentRoster {
    /// Build a roster from an ordered list of students.
    #[must_use]
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Roster loaded at process start.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            SEED.iter()
                .map(|(first, last)| Student::new(*first, *last))
                .collect(),
        )
    }

    /// Every student, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    /// Student at `index`.
    ///
    /// # Errors
    /// Returns [`RosterLookupError::IndexOutOfRange`] when `index` is negative
    /// or not below [`StudentRoster::len`].
    pub fn get(&self, index: i64) -> Result<&Student, RosterLookupError> {
        let out_of_range = || RosterLookupError::IndexOutOfRange {
            index,
            len: self.students.len(),
        };
        let position = usize::try_from(index).map_err(|_| out_of_range())?;
        self.students.get(position).ok_or_else(out_of_range)
    }

    /// Number of students held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster holds no students.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl From<RosterLookupError> for Error {
    fn from(err: RosterLookupError) -> Self {
        match err {
            RosterLookupError::IndexOutOfRange { index, .. } => {
                Self::not_found(format!("Student id {index} not found"))
            }
        }
    }
}

#[async_trait]
impl StudentsQuery for StudentRoster {
    async fn list_students(&self) -> Result<Vec<Student>, Error> {
        Ok(self.list().to_vec())
    }

    async fn student_at(&self, index: i64) -> Result<Student, Error> {
        Ok(self.get(index)?.clone())
    }
}
