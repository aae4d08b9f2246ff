//! Student seeding: user rows plus their student records.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use unirecords_models::{StudentId, UserId, UserRole};

use super::models::{SeededDepartment, SeededStudent, StudentSeed};
use super::values_clause;

/// Matric number such as `CSC/2023/0042`; the entry year is derived from the
/// level so a 200 level student entered one session before `session_start`.
pub(crate) fn matric_number(department_code: &str, level: i32, session_start: i32, seq: usize) -> String {
    let entry_year = session_start - (level / 100 - 1);
    format!("{}/{}/{:04}", department_code, entry_year, seq)
}

/// Generates students for every non-service department, spreading them
/// across `levels` round-robin.
pub fn generate_students(
    departments: &[SeededDepartment],
    students_per_department: usize,
    levels: &[i32],
    session_start: i32,
    password_hash: &str,
) -> Vec<StudentSeed> {
    if levels.is_empty() {
        return Vec::new();
    }

    departments
        .par_iter()
        .filter(|department| !department.is_service_department)
        .flat_map_iter(|department| {
            (0..students_per_department).map(move |idx| {
                let first_name: String = FirstName().fake();
                let last_name: String = LastName().fake();
                let level = levels[idx % levels.len()];
                let seq = idx + 1;

                StudentSeed {
                    email: format!(
                        "{}.{}+{}{}@example.com",
                        first_name.to_lowercase(),
                        last_name.to_lowercase(),
                        department.code.to_lowercase(),
                        seq
                    ),
                    name: format!("{} {}", first_name, last_name),
                    password_hash: password_hash.to_string(),
                    matric_number: matric_number(&department.code, level, session_start, seq),
                    level,
                    department_id: department.id,
                }
            })
        })
        .collect()
}

pub async fn insert_students(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> anyhow::Result<Vec<SeededStudent>> {
    // 4 params per row in both statements
    const BATCH_SIZE: usize = 1000;
    let mut seeded = Vec::with_capacity(students.len());

    for chunk in students.chunks(BATCH_SIZE) {
        let query = format!(
            "INSERT INTO users (name, email, password, role) VALUES {} RETURNING id",
            values_clause(chunk.len(), 4)
        );
        let mut q = sqlx::query_scalar::<_, UserId>(&query);
        for student in chunk {
            q = q
                .bind(&student.name)
                .bind(&student.email)
                .bind(&student.password_hash)
                .bind(UserRole::Student);
        }
        let user_ids = q.fetch_all(&mut **tx).await?;

        let query = format!(
            "INSERT INTO students (user_id, matric_number, level, department_id) VALUES {} RETURNING id",
            values_clause(chunk.len(), 4)
        );
        let mut q = sqlx::query_scalar::<_, StudentId>(&query);
        for (user_id, student) in user_ids.iter().zip(chunk) {
            q = q
                .bind(user_id)
                .bind(&student.matric_number)
                .bind(student.level)
                .bind(student.department_id);
        }
        let student_ids = q.fetch_all(&mut **tx).await?;

        seeded.extend(
            student_ids
                .into_iter()
                .zip(user_ids)
                .zip(chunk)
                .map(|((id, user_id), student)| SeededStudent {
                    id,
                    user_id,
                    level: student.level,
                    department_id: student.department_id,
                }),
        );
    }

    Ok(seeded)
}

pub async fn seed_students(
    tx: &mut Transaction<'_, Postgres>,
    departments: &[SeededDepartment],
    students_per_department: usize,
    levels: &[i32],
    session_start: i32,
    password_hash: &str,
) -> anyhow::Result<Vec<SeededStudent>> {
    let start_time = Instant::now();
    println!(
        "🎓 Seeding {} students per department...",
        students_per_department
    );

    let students = generate_students(
        departments,
        students_per_department,
        levels,
        session_start,
        password_hash,
    );
    let seeded = insert_students(tx, &students).await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        seeded.len(),
        start_time.elapsed()
    );

    Ok(seeded)
}

/// Deletes every student and lecturer account. Role records, registrations
/// and selections cascade. Admin accounts are kept.
pub async fn clear_users(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing student and lecturer accounts...");

    let result = sqlx::query("DELETE FROM users WHERE role IN ('STUDENT', 'LECTURER')")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} users in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
