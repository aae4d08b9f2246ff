use axum::{Json, extract::State};
use chrono::Utc;
use tracing::instrument;

use unirecords_core::{AppError, ErrorResponse};
use unirecords_models::{ProfileView, RoleProfile};
use unirecords_observability::track_profile_load;

use super::service::{ProfileFetch, ProfileService};
use super::view::build_profile_view;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Role-scoped profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/user/profile",
    responses(
        (status = 200, description = "Role profile", body = RoleProfile),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profile"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.0.sub))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<RoleProfile>, AppError> {
    let user_id = auth_user.user_id()?;
    let profile = ProfileService::get_role_profile(state.repository.as_ref(), user_id).await?;
    Ok(Json(profile))
}

/// Profile page model: header, achievements, statistics and contact details
#[utoipa::path(
    get,
    path = "/api/user/profile/view",
    responses(
        (status = 200, description = "Profile view", body = ProfileView),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profile"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.0.sub, role = %auth_user.0.role))]
pub async fn get_profile_view(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ProfileView>, AppError> {
    let fetch = match auth_user.user_id() {
        Ok(user_id) => ProfileService::fetch_for_view(state.repository.as_ref(), user_id).await,
        Err(_) => ProfileFetch::Unavailable,
    };

    let status = match fetch {
        ProfileFetch::Loaded(_) => "loaded",
        ProfileFetch::Unavailable => "unavailable",
    };
    track_profile_load(auth_user.role(), status);

    let view = build_profile_view(
        &auth_user.0,
        &fetch,
        &state.presentation,
        Utc::now().date_naive(),
    );

    Ok(Json(view))
}
