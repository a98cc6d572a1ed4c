//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the student read endpoints, the health probes and the
//! schemas they reference. The document backs Swagger UI in debug builds and
//! is printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::StudentSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student roster API",
        description = "Read-only access to a fixed roster of students, addressed by position."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(StudentSchema, ErrorResponse)),
    tags(
        (name = "students", description = "Roster read operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
