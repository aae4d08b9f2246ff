//! School and department seeding.
//!
//! Every run also creates a general studies school holding the service
//! departments whose courses are open to all students.

use fake::Fake;
use fake::faker::address::en::CityName;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use unirecords_models::{DepartmentId, SchoolId};

use super::models::{DepartmentSeed, SchoolSeed, SeededDepartment};
use super::values_clause;

const FACULTIES: &[&str] = &[
    "Computing",
    "Engineering",
    "Management Sciences",
    "Life Sciences",
    "Social Sciences",
    "Arts",
    "Environmental Design",
];

const DISCIPLINES: &[(&str, &str)] = &[
    ("Computer Science", "CSC"),
    ("Electrical Engineering", "EEE"),
    ("Mechanical Engineering", "MEE"),
    ("Civil Engineering", "CVE"),
    ("Economics", "ECO"),
    ("Accounting", "ACC"),
    ("Business Administration", "BUS"),
    ("Biochemistry", "BCH"),
    ("Microbiology", "MCB"),
    ("Political Science", "POL"),
    ("English", "ENG"),
    ("History", "HIS"),
    ("Architecture", "ARC"),
    ("Geology", "GEO"),
    ("Psychology", "PSY"),
    ("Sociology", "SOC"),
];

pub const SERVICE_SCHOOL: (&str, &str) = ("School of General Studies", "SGS");

pub const SERVICE_DISCIPLINES: &[(&str, &str)] = &[
    ("General Studies", "GST"),
    ("Mathematics", "MTH"),
    ("Physics", "PHY"),
    ("Chemistry", "CHM"),
];

pub fn generate_schools(count: usize) -> Vec<SchoolSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let city: String = CityName().fake();
            SchoolSeed {
                name: format!(
                    "{} School of {}",
                    city,
                    FACULTIES[idx % FACULTIES.len()]
                ),
                code: format!("SCH{:03}", idx + 1),
            }
        })
        .collect()
}

/// Department code for the `index`-th use of a discipline. The first use
/// keeps the bare code, later ones get a numeric suffix.
pub(crate) fn department_code(base: &str, index: usize) -> String {
    let round = index / DISCIPLINES.len();
    if round == 0 {
        base.to_string()
    } else {
        format!("{}{}", base, round + 1)
    }
}

pub fn generate_departments(
    school_ids: &[SchoolId],
    departments_per_school: usize,
) -> Vec<DepartmentSeed> {
    school_ids
        .par_iter()
        .enumerate()
        .flat_map_iter(|(school_idx, &school_id)| {
            (0..departments_per_school).map(move |dept_idx| {
                let index = school_idx * departments_per_school + dept_idx;
                let (name, code) = DISCIPLINES[index % DISCIPLINES.len()];
                DepartmentSeed {
                    name: name.to_string(),
                    code: department_code(code, index),
                    school_id,
                    is_service_department: false,
                }
            })
        })
        .collect()
}

pub fn service_departments(school_id: SchoolId) -> Vec<DepartmentSeed> {
    SERVICE_DISCIPLINES
        .iter()
        .map(|(name, code)| DepartmentSeed {
            name: name.to_string(),
            code: code.to_string(),
            school_id,
            is_service_department: true,
        })
        .collect()
}

pub async fn insert_schools(
    tx: &mut Transaction<'_, Postgres>,
    schools: &[SchoolSeed],
) -> anyhow::Result<Vec<SchoolId>> {
    const BATCH_SIZE: usize = 500;
    let mut all_ids = Vec::with_capacity(schools.len());

    for chunk in schools.chunks(BATCH_SIZE) {
        if chunk.is_empty() {
            continue;
        }
        let query = format!(
            "INSERT INTO schools (name, code) VALUES {} RETURNING id",
            values_clause(chunk.len(), 2)
        );
        let mut q = sqlx::query_scalar::<_, SchoolId>(&query);
        for school in chunk {
            q = q.bind(&school.name).bind(&school.code);
        }
        all_ids.extend(q.fetch_all(&mut **tx).await?);
    }

    Ok(all_ids)
}

pub async fn insert_departments(
    tx: &mut Transaction<'_, Postgres>,
    departments: &[DepartmentSeed],
) -> anyhow::Result<Vec<SeededDepartment>> {
    const BATCH_SIZE: usize = 500;
    let mut seeded = Vec::with_capacity(departments.len());

    for chunk in departments.chunks(BATCH_SIZE) {
        let query = format!(
            "INSERT INTO departments (name, code, school_id, is_service_department) VALUES {} RETURNING id",
            values_clause(chunk.len(), 4)
        );
        let mut q = sqlx::query_scalar::<_, DepartmentId>(&query);
        for department in chunk {
            q = q
                .bind(&department.name)
                .bind(&department.code)
                .bind(department.school_id)
                .bind(department.is_service_department);
        }
        let ids = q.fetch_all(&mut **tx).await?;

        seeded.extend(ids.into_iter().zip(chunk).map(|(id, department)| {
            SeededDepartment {
                id,
                name: department.name.clone(),
                code: department.code.clone(),
                is_service_department: department.is_service_department,
            }
        }));
    }

    Ok(seeded)
}

/// Seeds schools, their departments and the service departments.
pub async fn seed_schools_and_departments(
    tx: &mut Transaction<'_, Postgres>,
    num_schools: usize,
    departments_per_school: usize,
) -> anyhow::Result<Vec<SeededDepartment>> {
    let start_time = Instant::now();
    println!(
        "📚 Seeding {} schools with {} departments each...",
        num_schools, departments_per_school
    );

    let schools = generate_schools(num_schools);
    let school_ids = insert_schools(tx, &schools).await?;

    let service_school = SchoolSeed {
        name: SERVICE_SCHOOL.0.to_string(),
        code: SERVICE_SCHOOL.1.to_string(),
    };
    let service_school_ids = insert_schools(tx, std::slice::from_ref(&service_school)).await?;

    let mut departments = generate_departments(&school_ids, departments_per_school);
    for school_id in service_school_ids {
        departments.extend(service_departments(school_id));
    }

    let seeded = insert_departments(tx, &departments).await?;

    println!(
        "   ✓ Inserted {} schools and {} departments in {:?}",
        school_ids.len() + 1,
        seeded.len(),
        start_time.elapsed()
    );

    Ok(seeded)
}

/// Deletes every school; departments and courses cascade.
pub async fn clear_schools(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing schools...");

    let result = sqlx::query("DELETE FROM schools")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} schools in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schools_has_unique_codes() {
        let schools = generate_schools(12);
        let mut codes: Vec<_> = schools.iter().map(|s| s.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 12);
        assert_eq!(schools[0].code, "SCH001");
    }

    #[test]
    fn test_generate_departments_codes_stay_unique_past_pool() {
        let school_ids: Vec<SchoolId> = (0..5).map(|i| SchoolId::from_u128(i + 1)).collect();
        let departments = generate_departments(&school_ids, 5);
        assert_eq!(departments.len(), 25);

        let mut codes: Vec<_> = departments.iter().map(|d| d.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 25);
        assert!(departments.iter().all(|d| !d.is_service_department));
    }

    #[test]
    fn test_department_code_suffix() {
        assert_eq!(department_code("CSC", 0), "CSC");
        assert_eq!(department_code("CSC", DISCIPLINES.len()), "CSC2");
        assert_eq!(department_code("CSC", DISCIPLINES.len() * 2), "CSC3");
    }

    #[test]
    fn test_service_departments_are_tagged() {
        let departments = service_departments(SchoolId::from_u128(9));
        assert_eq!(departments.len(), 4);
        assert!(departments.iter().all(|d| d.is_service_department));
        assert!(departments.iter().any(|d| d.name == "General Studies"));
    }
}
