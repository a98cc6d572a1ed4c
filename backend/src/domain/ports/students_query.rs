//! Driving port for student read queries.
//!
//! HTTP handlers depend on this port rather than on the roster itself, so
//! tests can substitute failing or recording implementations.

use async_trait::async_trait;

use crate::domain::{Error, Student};

/// Domain use-case port for reading students.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsQuery: Send + Sync {
    /// Return every student in roster order.
    async fn list_students(&self) -> Result<Vec<Student>, Error>;

    /// Return the student at `index`.
    ///
    /// Implementations report out-of-range positions as
    /// [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound) with a
    /// message naming the requested index.
    async fn student_at(&self, index: i64) -> Result<Student, Error>;
}
