//! Student read handlers.
//!
//! ```text
//! GET /api/students
//! GET /api/students/{id}
//! ```
//!
//! Both resources answer any other method with the generic bad-request
//! envelope, and a non-integer `{id}` is rejected the same way by the path
//! extractor hook, as is one outside the 32-bit range.

use actix_web::web;

use crate::domain::Student;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorResponse, path_error_handler, unmatched_route};
use crate::inbound::http::schemas::StudentSchema;
use crate::inbound::http::state::HttpState;

/// Register the student resources under `/api`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster::inbound::http::students;
///
/// let app = App::new().configure(students::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(
                web::resource("/students")
                    .route(web::get().to(list_students))
                    .default_service(web::to(unmatched_route)),
            )
            .service(
                web::resource("/students/{id}")
                    .route(web::get().to(get_student))
                    .default_service(web::to(unmatched_route)),
            ),
    );
}

/// List every student in roster order.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "Students", body = [StudentSchema]),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Student>>> {
    let students = state
        .students
        .list_students()
        .await
        .map_err(|err| state.reject(&err))?;
    Ok(web::Json(students))
}

/// Fetch the student at position `id`.
///
/// Ids are 32-bit; anything wider is rejected as a bad request before the
/// roster is consulted.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Zero-based position in the roster")),
    responses(
        (status = 200, description = "Student", body = StudentSchema),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "No student at that position", body = ErrorResponse)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
pub async fn get_student(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<Student>> {
    let index = i64::from(id.into_inner());
    let student = state
        .students
        .student_at(index)
        .await
        .map_err(|err| state.reject(&err))?;
    Ok(web::Json(student))
}
