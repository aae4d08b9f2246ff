use axum::{Router, routing::post};

use unirecords_core::MethodNotAllowed;

use crate::state::AppState;

use super::controller::login_user;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route(
        "/login",
        post(login_user).fallback(|| async { MethodNotAllowed::new("POST") }),
    )
}
