//! First-semester registrations with course selections for seeded students.

use fake::Fake;
use rayon::prelude::*;
use sqlx::{Postgres, Transaction};
use std::collections::HashMap;
use std::time::Instant;
use unirecords_models::{
    CourseId, CourseRegistrationId, DepartmentId, RegistrationStatus, Semester, StudentId,
};

use super::models::{SeededCourse, SeededStudent};
use super::values_clause;

pub struct RegistrationSeed {
    pub student_id: StudentId,
    pub status: RegistrationStatus,
    pub course_ids: Vec<CourseId>,
}

fn random_status() -> RegistrationStatus {
    match (0..3).fake::<u8>() {
        0 => RegistrationStatus::Pending,
        1 => RegistrationStatus::Approved,
        _ => RegistrationStatus::Rejected,
    }
}

/// One first-semester registration per student, selecting the courses of the
/// student's own department at the student's level.
pub fn generate_registrations(
    students: &[SeededStudent],
    courses: &[SeededCourse],
) -> Vec<RegistrationSeed> {
    let mut offered: HashMap<(DepartmentId, i32), Vec<CourseId>> = HashMap::new();
    for course in courses.iter().filter(|c| c.semester == Semester::First) {
        offered
            .entry((course.department_id, course.level))
            .or_default()
            .push(course.id);
    }

    students
        .par_iter()
        .map(|student| RegistrationSeed {
            student_id: student.id,
            status: random_status(),
            course_ids: offered
                .get(&(student.department_id, student.level))
                .cloned()
                .unwrap_or_default(),
        })
        .collect()
}

pub async fn insert_registrations(
    tx: &mut Transaction<'_, Postgres>,
    registrations: &[RegistrationSeed],
    academic_year: &str,
) -> anyhow::Result<usize> {
    const BATCH_SIZE: usize = 1000;
    let mut selections: Vec<(CourseRegistrationId, CourseId)> = Vec::new();

    for chunk in registrations.chunks(BATCH_SIZE) {
        let query = format!(
            "INSERT INTO course_registrations (student_id, academic_year, semester, status) VALUES {} RETURNING id",
            values_clause(chunk.len(), 4)
        );
        let mut q = sqlx::query_scalar::<_, CourseRegistrationId>(&query);
        for registration in chunk {
            q = q
                .bind(registration.student_id)
                .bind(academic_year)
                .bind(Semester::First)
                .bind(registration.status);
        }
        let ids = q.fetch_all(&mut **tx).await?;

        for (id, registration) in ids.into_iter().zip(chunk) {
            selections.extend(registration.course_ids.iter().map(|&course_id| (id, course_id)));
        }
    }

    const SELECTION_BATCH_SIZE: usize = 5000;
    for chunk in selections.chunks(SELECTION_BATCH_SIZE) {
        let query = format!(
            "INSERT INTO course_selections (course_registration_id, course_id) VALUES {}",
            values_clause(chunk.len(), 2)
        );
        let mut q = sqlx::query(&query);
        for (registration_id, course_id) in chunk {
            q = q.bind(registration_id).bind(course_id);
        }
        q.execute(&mut **tx).await?;
    }

    Ok(selections.len())
}

pub async fn seed_registrations(
    tx: &mut Transaction<'_, Postgres>,
    students: &[SeededStudent],
    courses: &[SeededCourse],
    academic_year: &str,
) -> anyhow::Result<()> {
    let start_time = Instant::now();
    println!(
        "📝 Seeding {} registrations for {}...",
        students.len(),
        academic_year
    );

    let registrations = generate_registrations(students, courses);
    let selections = insert_registrations(tx, &registrations, academic_year).await?;

    println!(
        "   ✓ Inserted {} registrations and {} selections in {:?}",
        registrations.len(),
        selections,
        start_time.elapsed()
    );

    Ok(())
}
