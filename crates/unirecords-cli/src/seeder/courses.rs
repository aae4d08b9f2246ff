//! Course seeding: every department gets courses at every level in both
//! semesters.

use fake::Fake;
use rayon::prelude::*;
use sqlx::{Postgres, Transaction};
use std::time::Instant;
use unirecords_models::{CourseId, Semester};

use super::models::{CourseSeed, SeededCourse, SeededDepartment};
use super::values_clause;

const TOPICS: &[&str] = &[
    "Foundations",
    "Methods",
    "Systems",
    "Theory",
    "Laboratory",
    "Applications",
    "Seminar",
    "Project",
];

/// Course code such as `CSC201`: department code, level digit, then a
/// sequence that is odd in the first semester and even in the second.
pub(crate) fn course_code(department_code: &str, level: i32, semester: Semester, n: usize) -> String {
    let sequence = match semester {
        Semester::First => n * 2 + 1,
        Semester::Second => n * 2 + 2,
    };
    format!("{}{}{:02}", department_code, level / 100, sequence)
}

pub fn generate_courses(
    departments: &[SeededDepartment],
    levels: &[i32],
    courses_per_semester: usize,
) -> Vec<CourseSeed> {
    departments
        .par_iter()
        .flat_map_iter(|department| {
            let mut courses =
                Vec::with_capacity(levels.len() * Semester::ALL.len() * courses_per_semester);
            for &level in levels {
                for semester in Semester::ALL {
                    for n in 0..courses_per_semester {
                        let topic = TOPICS[(n + level as usize / 100) % TOPICS.len()];
                        courses.push(CourseSeed {
                            code: course_code(&department.code, level, semester, n),
                            title: format!("{} {} {}", department.name, topic, level / 100),
                            credit_unit: (1..5).fake::<i32>(),
                            semester,
                            level,
                            department_id: department.id,
                        });
                    }
                }
            }
            courses
        })
        .collect()
}

pub async fn insert_courses(
    tx: &mut Transaction<'_, Postgres>,
    courses: &[CourseSeed],
) -> anyhow::Result<Vec<SeededCourse>> {
    // 6 params per course
    const BATCH_SIZE: usize = 1000;
    let mut seeded = Vec::with_capacity(courses.len());

    for chunk in courses.chunks(BATCH_SIZE) {
        let query = format!(
            "INSERT INTO courses (code, title, credit_unit, semester, level, department_id) VALUES {} RETURNING id",
            values_clause(chunk.len(), 6)
        );
        let mut q = sqlx::query_scalar::<_, CourseId>(&query);
        for course in chunk {
            q = q
                .bind(&course.code)
                .bind(&course.title)
                .bind(course.credit_unit)
                .bind(course.semester)
                .bind(course.level)
                .bind(course.department_id);
        }
        let ids = q.fetch_all(&mut **tx).await?;

        seeded.extend(ids.into_iter().zip(chunk).map(|(id, course)| SeededCourse {
            id,
            department_id: course.department_id,
            level: course.level,
            semester: course.semester,
        }));
    }

    Ok(seeded)
}

pub async fn seed_courses(
    tx: &mut Transaction<'_, Postgres>,
    departments: &[SeededDepartment],
    levels: &[i32],
    courses_per_semester: usize,
) -> anyhow::Result<Vec<SeededCourse>> {
    let start_time = Instant::now();
    println!("📖 Seeding courses for {} departments...", departments.len());

    let courses = generate_courses(departments, levels, courses_per_semester);
    let seeded = insert_courses(tx, &courses).await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        seeded.len(),
        start_time.elapsed()
    );

    Ok(seeded)
}
