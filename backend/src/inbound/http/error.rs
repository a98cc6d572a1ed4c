//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failed request the same JSON envelope:
//!
//! ```text
//! {"status": 404, "message": "Student id 9 not found", "timestamp": "1704067200000"}
//! ```
//!
//! Only not-found errors expose their own message. Everything else collapses
//! to a fixed 400 response so parsing and internal details never reach the
//! client.

use std::fmt;

use actix_web::error::PathError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::state::HttpState;

/// Message returned for every failure that is not a missing student.
pub const GENERIC_BAD_REQUEST_MESSAGE: &str =
    "The params do not match the expected input. Please Check the input and try again.";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Error payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub status: u16,
    /// Human-readable explanation.
    #[schema(example = "Student id 9 not found")]
    pub message: String,
    /// Epoch milliseconds at which the error was produced.
    #[schema(example = "1704067200000")]
    pub timestamp: String,
}

impl ErrorResponse {
    /// Render a domain error, stamping it with the clock's current time.
    ///
    /// # Examples
    /// ```
    /// use mockable::DefaultClock;
    /// use roster::domain::Error;
    /// use roster::inbound::http::error::ErrorResponse;
    ///
    /// let body = ErrorResponse::from_error(&Error::not_found("Student id 4 not found"), &DefaultClock);
    /// assert_eq!(body.status, 404);
    /// assert_eq!(body.message, "Student id 4 not found");
    /// ```
    pub fn from_error(error: &Error, clock: &dyn Clock) -> Self {
        let status = status_for(error.code());
        let message = match error.code() {
            ErrorCode::NotFound => error.message().to_owned(),
            _ => GENERIC_BAD_REQUEST_MESSAGE.to_owned(),
        };
        Self {
            status: status.as_u16(),
            message,
            timestamp: clock.utc().timestamp_millis().to_string(),
        }
    }
}

/// Rendered error ready to be written as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    body: ErrorResponse,
}

impl ApiError {
    /// Render `error` using `clock` for the timestamp.
    pub fn new(error: &Error, clock: &dyn Clock) -> Self {
        match error.code() {
            ErrorCode::InternalError => error!(error = %error, "request failed internally"),
            code => debug!(%code, error = %error, "request rejected"),
        }
        Self {
            body: ErrorResponse::from_error(error, clock),
        }
    }

    /// Payload that will be serialised into the response body.
    #[must_use]
    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.body.status, self.body.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.body.status).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.body)
    }
}

/// Build an [`ApiError`] from request context, falling back to the system
/// clock when no [`HttpState`] is registered.
pub(crate) fn reject_request(req: &HttpRequest, error: &Error) -> ApiError {
    match req.app_data::<web::Data<HttpState>>() {
        Some(state) => state.reject(error),
        None => ApiError::new(error, &DefaultClock),
    }
}

/// Path extractor hook turning unparseable segments into bad requests.
///
/// Register through [`actix_web::web::PathConfig::error_handler`].
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let error = Error::invalid_request(format!("invalid path parameter: {err}"));
    reject_request(req, &error).into()
}

/// Fallback service for requests no route accepts.
///
/// # Errors
/// Always returns a bad-request [`ApiError`].
pub async fn unmatched_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    let error = Error::invalid_request(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    ));
    Err(reject_request(&req, &error))
}

#[cfg(test)]
mod tests;
