use anyhow::anyhow;
use tracing::instrument;

use unirecords_auth::create_access_token;
use unirecords_config::JwtConfig;
use unirecords_core::{AppError, verify_password};
use unirecords_models::{LoginRequest, LoginResponse, LoginUser};
use unirecords_observability::{
    track_jwt_issued, track_user_login_failure, track_user_login_success,
};

use crate::repository::AcademicRepository;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(repository, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        repository: &dyn AcademicRepository,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(credentials) = repository.find_credentials_by_email(&dto.email).await? else {
            track_user_login_failure("unknown_email");
            return Err(AppError::unauthorized_with(anyhow!(
                INVALID_CREDENTIALS_MESSAGE
            )));
        };

        if !verify_password(&dto.password, &credentials.password)? {
            track_user_login_failure("wrong_password");
            return Err(AppError::unauthorized_with(anyhow!(
                INVALID_CREDENTIALS_MESSAGE
            )));
        }

        let access_token = create_access_token(
            credentials.id.into_inner(),
            &credentials.email,
            &credentials.name,
            credentials.role.as_str(),
            jwt_config,
        )?;

        track_jwt_issued();
        track_user_login_success(credentials.role.as_str());
        tracing::info!(user_id = %credentials.id, role = %credentials.role, "User logged in");

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_config.access_token_expiry,
            user: LoginUser {
                id: credentials.id,
                name: credentials.name,
                email: credentials.email,
                role: credentials.role,
            },
        })
    }
}
