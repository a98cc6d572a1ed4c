//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a listener.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::Error;
use crate::domain::ports::StudentsQuery;
use crate::inbound::http::error::ApiError;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read access to the student roster.
    pub students: Arc<dyn StudentsQuery>,
    /// Wall clock used to timestamp error responses.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from its ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use roster::domain::StudentRoster;
    /// use roster::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(StudentRoster::seeded()), Arc::new(DefaultClock));
    /// let _students = state.students.clone();
    /// ```
    pub fn new(students: Arc<dyn StudentsQuery>, clock: Arc<dyn Clock>) -> Self {
        Self { students, clock }
    }

    /// Render a domain error using this state's clock.
    #[must_use]
    pub fn reject(&self, error: &Error) -> ApiError {
        ApiError::new(error, self.clock.as_ref())
    }
}
