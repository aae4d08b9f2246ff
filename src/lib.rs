//! # Unirecords API
//!
//! Academic records service built with Axum and PostgreSQL.
//!
//! - `GET /api/student/courses`: the signed-in student's eligible courses for
//!   an academic year, split by semester, with credit totals and the
//!   student's registration status and selections.
//! - `GET /api/user/profile`: role-scoped profile (student, lecturer or
//!   admin record with its department and school).
//! - `GET /api/user/profile/view`: profile page model combining the role
//!   profile with the role presentation catalog.
//! - `POST /api/auth/login`: bearer token issue.
//!
//! ## Layout
//!
//! ```text
//! src/
//! ├── middleware/      # Bearer session extractor
//! ├── modules/
//! │   ├── auth/       # Login
//! │   ├── courses/    # Course load aggregation
//! │   └── profile/    # Role profile, presentation catalog, view model
//! ├── repository/      # AcademicRepository trait + Postgres implementation
//! ├── docs.rs          # OpenAPI document
//! ├── router.rs        # Route tree and layers
//! ├── state.rs         # Shared state
//! └── validator.rs     # Validated JSON extractor
//! ```
//!
//! Configuration, errors, JWT, models, database access and observability
//! live in the `unirecords-*` workspace crates.
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod repository;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use unirecords_auth;
pub use unirecords_config;
pub use unirecords_core;
pub use unirecords_db;
pub use unirecords_models;
