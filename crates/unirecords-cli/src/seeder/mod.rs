//! Fake data seeding.
//!
//! Generation runs in parallel with rayon; inserts use multi-row `VALUES`
//! statements inside a single transaction, so a failed run leaves nothing
//! behind.

pub mod courses;
pub mod models;
pub mod registrations;
pub mod schools;
pub mod users;

pub use models::SeedConfig;

use anyhow::{Context, anyhow};
use bcrypt::hash;
use sqlx::PgPool;
use std::time::Instant;
use unirecords_core::AcademicYear;

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

// Seeded accounts share one password, so a low cost keeps seeding fast.
const SEED_BCRYPT_COST: u32 = 4;

/// Builds `($1, $2), ($3, $4), ...` for `rows` rows of `columns` parameters.
pub(crate) fn values_clause(rows: usize, columns: usize) -> String {
    (0..rows)
        .map(|row| {
            let params: Vec<String> = (1..=columns)
                .map(|col| format!("${}", row * columns + col))
                .collect();
            format!("({})", params.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let academic_year: AcademicYear = config
        .academic_year
        .parse()
        .map_err(|e| anyhow!("{}", e))?;

    println!("🌱 Starting database seeding...");
    println!("   - Schools: {}", config.num_schools);
    println!("   - Departments per school: {}", config.departments_per_school);
    println!("   - Levels: {:?}", config.levels);
    println!("   - Students per department: {}", config.students_per_department);
    println!("   - Academic year: {}", academic_year);

    let password_hash =
        hash(SEED_PASSWORD, SEED_BCRYPT_COST).context("Failed to hash seed password")?;

    let mut tx = db.begin().await?;

    let departments = schools::seed_schools_and_departments(
        &mut tx,
        config.num_schools,
        config.departments_per_school,
    )
    .await?;

    let courses = courses::seed_courses(
        &mut tx,
        &departments,
        &config.levels,
        config.courses_per_semester,
    )
    .await?;

    let students = users::seed_students(
        &mut tx,
        &departments,
        config.students_per_department,
        &config.levels,
        academic_year.start_year(),
        &password_hash,
    )
    .await?;

    registrations::seed_registrations(&mut tx, &students, &courses, &academic_year.to_string())
        .await?;

    tx.commit().await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("\n📝 Default password for all seeded users: {}", SEED_PASSWORD);

    Ok(())
}

/// Removes seeded academic data and every non-admin account.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<()> {
    let start_time = Instant::now();
    println!("🧹 Clearing seeded data...");

    users::clear_users(db).await?;
    schools::clear_schools(db).await?;

    println!("\n✅ Cleared seeded data in {:?}", start_time.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_clause() {
        assert_eq!(values_clause(1, 2), "($1, $2)");
        assert_eq!(values_clause(2, 3), "($1, $2, $3), ($4, $5, $6)");
        assert_eq!(values_clause(0, 4), "");
    }
}
