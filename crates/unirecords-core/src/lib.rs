//! # unirecords core
//!
//! Core types, errors, and utilities shared by every unirecords crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`academic_year`]: The `YYYY/YYYY` academic session token
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use unirecords_core::{AcademicYear, AppError};
//!
//! let year: AcademicYear = "2024/2025".parse()?;
//! let error = AppError::not_found(anyhow::anyhow!("Student profile not found"));
//! ```

pub mod academic_year;
pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use academic_year::{AcademicYear, AcademicYearError};
pub use errors::{AppError, ErrorResponse, MethodNotAllowed};
pub use password::{hash_password, verify_password};
