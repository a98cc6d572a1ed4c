//! Tests for HTTP error mapping.

use super::*;
use crate::inbound::http::test_utils::{FIXED_MILLIS, FixedClock, seeded_state};
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;

#[rstest]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::internal("boom"), StatusCode::BAD_REQUEST)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    let api_error = ApiError::new(&error, &FixedClock);
    assert_eq!(ResponseError::status_code(&api_error), expected);
    assert_eq!(api_error.body().status, expected.as_u16());
}

#[rstest]
fn not_found_keeps_domain_message() {
    let body = ErrorResponse::from_error(&Error::not_found("Student id 4 not found"), &FixedClock);
    assert_eq!(
        body,
        ErrorResponse {
            status: 404,
            message: "Student id 4 not found".to_owned(),
            timestamp: FIXED_MILLIS.to_string(),
        }
    );
}

#[rstest]
#[case(Error::invalid_request("invalid path parameter: abc"))]
#[case(Error::internal("connection reset by peer"))]
fn other_errors_use_generic_message(#[case] error: Error) {
    let body = ErrorResponse::from_error(&error, &FixedClock);
    assert_eq!(body.message, GENERIC_BAD_REQUEST_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn error_response_serialises_envelope() {
    let api_error = ApiError::new(&Error::not_found("Student id 9 not found"), &FixedClock);
    let response = ResponseError::error_response(&api_error);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("JSON body");
    assert_eq!(
        value,
        serde_json::json!({
            "status": 404,
            "message": "Student id 9 not found",
            "timestamp": FIXED_MILLIS.to_string(),
        })
    );
}

#[rstest]
fn reject_request_prefers_state_clock() {
    let req = TestRequest::default()
        .app_data(seeded_state())
        .to_http_request();
    let api_error = reject_request(&req, &Error::invalid_request("bad"));
    assert_eq!(api_error.body().timestamp, FIXED_MILLIS.to_string());
}

#[rstest]
fn reject_request_falls_back_to_system_clock() {
    let req = TestRequest::default().to_http_request();
    let api_error = reject_request(&req, &Error::invalid_request("bad"));
    let millis: i64 = api_error.body().timestamp.parse().expect("numeric timestamp");
    assert!(millis > FIXED_MILLIS, "system clock should be later than fixture");
}

#[rstest]
fn display_includes_status_and_message() {
    let api_error = ApiError::new(&Error::not_found("Student id 5 not found"), &FixedClock);
    assert_eq!(api_error.to_string(), "404 Student id 5 not found");
}
