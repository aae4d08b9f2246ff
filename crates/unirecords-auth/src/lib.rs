//! # unirecords auth
//!
//! Session claims and JWT utilities.
//!
//! - [`claims`]: the identity carried by an access token
//! - [`jwt`]: token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use unirecords_auth::{create_access_token, verify_token};
//! use unirecords_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "ada@uni.edu", "Ada Obi", "STUDENT", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
