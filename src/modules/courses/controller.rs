use anyhow::anyhow;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::instrument;

use unirecords_core::{AcademicYear, AppError, ErrorResponse};
use unirecords_models::{CourseLoadQuery, CourseLoadResponse};

use super::service::CourseService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn resolve_academic_year(
    query: &CourseLoadQuery,
    current: &AcademicYear,
) -> Result<AcademicYear, AppError> {
    match query.academic_year.as_deref() {
        None => Ok(current.clone()),
        Some(raw) => raw.parse::<AcademicYear>().map_err(AppError::bad_request),
    }
}

/// Course load of the signed-in student
#[utoipa::path(
    get,
    path = "/api/student/courses",
    params(CourseLoadQuery),
    responses(
        (status = 200, description = "Eligible courses and registration state per semester", body = CourseLoadResponse),
        (status = 400, description = "Malformed academic year", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student profile not found", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.0.sub))]
pub async fn get_student_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
    query: Result<Query<CourseLoadQuery>, QueryRejection>,
) -> Result<Json<CourseLoadResponse>, AppError> {
    let Query(query) =
        query.map_err(|_| AppError::bad_request(anyhow!("Invalid query parameters")))?;
    let academic_year = resolve_academic_year(&query, &state.academic_config.current_year)?;
    let user_id = auth_user.user_id()?;

    let load = CourseService::get_course_load(
        state.repository.as_ref(),
        &state.academic_config,
        user_id,
        &academic_year,
    )
    .await?;

    Ok(Json(load))
}
