use axum::{Router, routing::get};

use unirecords_core::MethodNotAllowed;

use crate::state::AppState;

use super::controller::get_student_courses;

pub fn init_courses_router() -> Router<AppState> {
    Router::new().route(
        "/courses",
        get(get_student_courses).fallback(|| async { MethodNotAllowed::new("GET") }),
    )
}
