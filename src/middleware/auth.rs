use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use unirecords_auth::{Claims, verify_token};
use unirecords_core::AppError;
use unirecords_models::UserId;

use crate::state::AppState;

/// Session guard: validates the bearer token and yields its claims.
///
/// Every failure (missing header, wrong scheme, bad or expired token) is a
/// 401 with the body `{ "message": "Unauthorized" }`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0
            .user_id()
            .map(UserId::from)
            .ok_or_else(AppError::unauthorized)
    }

    pub fn role(&self) -> &str {
        &self.0.role
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

pub(crate) fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(AppError::unauthorized)?;
        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
