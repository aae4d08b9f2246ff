//! # unirecords CLI
//!
//! Account creation and database seeding used by the `unirecords-cli`
//! binary.
//!
//! ```ignore
//! use unirecords_cli::seeder::{seed_all, SeedConfig};
//!
//! seed_all(&pool, SeedConfig::new(3)).await?;
//! ```

pub mod accounts;
pub mod seeder;
