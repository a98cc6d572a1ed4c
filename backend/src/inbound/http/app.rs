//! Application factory shared by the server and its tests.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::error::unmatched_route;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::students;
use crate::middleware::Trace;

/// Build the Actix application: trace middleware, student routes, health
/// probes, Swagger UI in debug builds and the bad-request fallback.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mockable::DefaultClock;
/// use roster::domain::StudentRoster;
/// use roster::inbound::http::app::build_app;
/// use roster::inbound::http::health::HealthState;
/// use roster::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(StudentRoster::seeded()), Arc::new(DefaultClock));
/// let app = build_app(web::Data::new(HealthState::new()), web::Data::new(state));
/// ```
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(students::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(unmatched_route))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;

    use super::{HealthState, build_app, web};
    use crate::inbound::http::error::{ErrorResponse, GENERIC_BAD_REQUEST_MESSAGE};
    use crate::inbound::http::test_utils::{FIXED_MILLIS, seeded_state};
    use crate::middleware::trace::TRACE_ID_HEADER;

    #[rstest]
    #[case("/api/students")]
    #[case("/api/students/4")]
    #[case("/nowhere")]
    #[actix_web::test]
    async fn every_response_carries_a_trace_id(#[case] uri: &str) {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            seeded_state(),
        ))
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("trace-id header");
        assert!(trace_id.parse::<uuid::Uuid>().is_ok());
    }

    #[rstest]
    #[actix_web::test]
    async fn health_probes_are_mounted() {
        let health = web::Data::new(HealthState::new());
        let app = actix_test::init_service(build_app(health.clone(), seeded_state())).await;

        let live = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/live").to_request(),
        )
        .await;
        assert_eq!(live.status(), StatusCode::OK);

        let ready = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);

        health.mark_ready();
        let ready = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(ready.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("/nowhere")]
    #[case("/health")]
    #[case("/api")]
    #[actix_web::test]
    async fn unmatched_routes_fall_back_to_bad_request(#[case] uri: &str) {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            seeded_state(),
        ))
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = actix_test::read_body_json(response).await;
        assert_eq!(error.status, 400);
        assert_eq!(error.message, GENERIC_BAD_REQUEST_MESSAGE);
        assert_eq!(error.timestamp, FIXED_MILLIS.to_string());
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[actix_web::test]
    async fn debug_builds_serve_the_openapi_document() {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            seeded_state(),
        ))
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api-docs/openapi.json")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let document: serde_json::Value = actix_test::read_body_json(response).await;
        assert!(document["paths"].get("/api/students/{id}").is_some());
    }
}
