//! Account creation with the matching role record.

use anyhow::{Context, anyhow, bail};
use sqlx::{PgPool, Postgres, Transaction};
use unirecords_core::hash_password;
use unirecords_models::{DepartmentId, SchoolId, UserId, UserRole};

/// Role-specific record created alongside the user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRecord {
    Student {
        matric_number: String,
        level: i32,
        department_code: String,
    },
    Lecturer {
        staff_id: String,
        department_code: String,
    },
    Admin {
        admin_id: String,
        department_code: Option<String>,
        school_code: Option<String>,
    },
}

impl RoleRecord {
    pub fn matches(&self, role: UserRole) -> bool {
        match self {
            RoleRecord::Student { .. } => role == UserRole::Student,
            RoleRecord::Lecturer { .. } => role == UserRole::Lecturer,
            RoleRecord::Admin { .. } => role.is_admin(),
        }
    }
}

pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub record: RoleRecord,
}

/// Creates the user and its role record in one transaction.
pub async fn create_account(db: &PgPool, account: &NewAccount) -> anyhow::Result<UserId> {
    if !account.record.matches(account.role) {
        bail!("Role record does not match role {}", account.role);
    }
    if account.password.is_empty() {
        bail!("Password must not be empty");
    }

    let hashed_password =
        hash_password(&account.password).map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;

    let mut tx = db.begin().await?;

    let user_id = sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(&account.name)
    .bind(&account.email)
    .bind(&hashed_password)
    .bind(account.role)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(user_id) = user_id else {
        tx.rollback().await?;
        bail!("User with this email already exists");
    };

    match &account.record {
        RoleRecord::Student {
            matric_number,
            level,
            department_code,
        } => {
            let department_id = department_by_code(&mut tx, department_code).await?;
            sqlx::query(
                "INSERT INTO students (user_id, matric_number, level, department_id)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(user_id)
            .bind(matric_number)
            .bind(level)
            .bind(department_id)
            .execute(&mut *tx)
            .await
            .context("Failed to create student record")?;
        }
        RoleRecord::Lecturer {
            staff_id,
            department_code,
        } => {
            let department_id = department_by_code(&mut tx, department_code).await?;
            sqlx::query(
                "INSERT INTO lecturers (user_id, staff_id, department_id) VALUES ($1, $2, $3)",
            )
            .bind(user_id)
            .bind(staff_id)
            .bind(department_id)
            .execute(&mut *tx)
            .await
            .context("Failed to create lecturer record")?;
        }
        RoleRecord::Admin {
            admin_id,
            department_code,
            school_code,
        } => {
            let department_id = match department_code {
                Some(code) => Some(department_by_code(&mut tx, code).await?),
                None => None,
            };
            let school_id = match school_code {
                Some(code) => Some(school_by_code(&mut tx, code).await?),
                None => None,
            };
            sqlx::query(
                "INSERT INTO admins (user_id, admin_id, department_id, school_id)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(user_id)
            .bind(admin_id)
            .bind(department_id)
            .bind(school_id)
            .execute(&mut *tx)
            .await
            .context("Failed to create admin record")?;
        }
    }

    tx.commit().await?;

    Ok(user_id)
}

async fn department_by_code(
    tx: &mut Transaction<'_, Postgres>,
    code: &str,
) -> anyhow::Result<DepartmentId> {
    sqlx::query_scalar::<_, DepartmentId>("SELECT id FROM departments WHERE code = $1")
        .bind(code)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| anyhow!("No department with code {}", code))
}

async fn school_by_code(
    tx: &mut Transaction<'_, Postgres>,
    code: &str,
) -> anyhow::Result<SchoolId> {
    sqlx::query_scalar::<_, SchoolId>("SELECT id FROM schools WHERE code = $1")
        .bind(code)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| anyhow!("No school with code {}", code))
}
