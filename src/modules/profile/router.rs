use axum::{Router, routing::get};

use unirecords_core::MethodNotAllowed;

use crate::state::AppState;

use super::controller::{get_profile, get_profile_view};

pub fn init_profile_router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(get_profile).fallback(|| async { MethodNotAllowed::new("GET") }),
        )
        .route(
            "/profile/view",
            get(get_profile_view).fallback(|| async { MethodNotAllowed::new("GET") }),
        )
}
