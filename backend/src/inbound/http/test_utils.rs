//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::StudentRoster;
use crate::domain::ports::StudentsQuery;
use crate::inbound::http::app::build_app;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
pub use crate::test_support::{FIXED_MILLIS, FixedClock};

/// State backed by `students` and the fixed clock.
pub fn state_with(students: Arc<dyn StudentsQuery>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(students, Arc::new(FixedClock)))
}

/// State backed by the seeded roster and the fixed clock.
pub fn seeded_state() -> web::Data<HttpState> {
    state_with(Arc::new(StudentRoster::seeded()))
}

/// The production app around `state`, with fresh probe state.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    build_app(web::Data::new(HealthState::new()), state)
}
