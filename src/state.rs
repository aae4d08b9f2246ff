use anyhow::Context;
use std::sync::Arc;

use unirecords_config::{AcademicConfig, CorsConfig, JwtConfig, ProfileConfig};
use unirecords_db::init_db_pool;

use crate::modules::profile::PresentationCatalog;
use crate::repository::{AcademicRepository, PgAcademicRepository};

/// Shared, immutable request state.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn AcademicRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub academic_config: AcademicConfig,
    pub presentation: Arc<PresentationCatalog>,
}

/// Connects to Postgres and loads every configuration section.
///
/// Fails on a missing database, a malformed `ACADEMIC_YEAR` or an unreadable
/// presentation catalog.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool().await?;
    let academic_config =
        AcademicConfig::from_env().context("Invalid ACADEMIC_YEAR configuration")?;
    let presentation = PresentationCatalog::load(&ProfileConfig::from_env())?;

    tracing::info!(
        academic_year = %academic_config.current_year,
        service_keywords = ?academic_config.service_department_keywords,
        "Application state initialized"
    );

    Ok(AppState {
        repository: Arc::new(PgAcademicRepository::new(db)),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        academic_config,
        presentation: Arc::new(presentation),
    })
}
