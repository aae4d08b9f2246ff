//! # unirecords config
//!
//! Configuration types for the unirecords API, loaded from environment
//! variables:
//!
//! - [`jwt`]: JWT signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`academic`]: Current academic year and service-department keywords
//! - [`profile`]: Profile presentation catalog location
//! - [`server`]: Listener addresses
//!
//! Every type exposes `from_env()` and a `from_lookup()` constructor that
//! takes a key lookup function, so parsing can be exercised without touching
//! the process environment.
//!
//! # Example
//!
//! ```ignore
//! use unirecords_config::{AcademicConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let academic_config = AcademicConfig::from_env()?;
//! ```

pub mod academic;
pub mod cors;
pub mod jwt;
pub mod profile;
pub mod server;

// Re-export commonly used types at crate root
pub use academic::{AcademicConfig, DEFAULT_SERVICE_DEPARTMENT_KEYWORDS};
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use profile::ProfileConfig;
pub use server::ServerConfig;

/// Reads a single environment variable, treating unset and non-unicode values alike.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Splits a comma separated value, trimming entries and dropping empty ones.
pub(crate) fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
