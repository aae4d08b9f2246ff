use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use unirecords_models::{
    Admin, Course, CourseId, CourseRegistration, CourseRegistrationId, CourseSelection,
    Department, DepartmentId, DepartmentSummary, Lecturer, School, SchoolId, Semester, Student,
    StudentId, User, UserCredentials, UserId,
};

use super::AcademicRepository;

#[derive(Clone, Debug)]
pub struct PgAcademicRepository {
    db: PgPool,
}

impl PgAcademicRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Course joined with its department, as returned by the course query.
#[derive(FromRow)]
struct CourseRow {
    id: CourseId,
    code: String,
    title: String,
    credit_unit: i32,
    semester: Semester,
    level: i32,
    department_id: DepartmentId,
    department_name: String,
    department_code: String,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id,
            code: row.code,
            title: row.title,
            credit_unit: row.credit_unit,
            semester: row.semester,
            level: row.level,
            department: DepartmentSummary {
                id: row.department_id,
                name: row.department_name,
                code: row.department_code,
            },
        }
    }
}

#[async_trait]
impl AcademicRepository for PgAcademicRepository {
    #[instrument(skip(self))]
    async fn find_user(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<UserCredentials>> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, name, email, role, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip(self))]
    async fn find_student_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, user_id, matric_number, level, department_id FROM students WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn find_lecturer_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Lecturer>> {
        let lecturer = sqlx::query_as::<_, Lecturer>(
            "SELECT id, user_id, staff_id, department_id FROM lecturers WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(lecturer)
    }

    #[instrument(skip(self))]
    async fn find_admin_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, user_id, admin_id, department_id, school_id FROM admins WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(admin)
    }

    #[instrument(skip(self))]
    async fn find_department(&self, id: DepartmentId) -> anyhow::Result<Option<Department>> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT id, name, code, school_id, is_service_department FROM departments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(department)
    }

    #[instrument(skip(self))]
    async fn find_school(&self, id: SchoolId) -> anyhow::Result<Option<School>> {
        let school = sqlx::query_as::<_, School>("SELECT id, name, code FROM schools WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(school)
    }

    #[instrument(skip(self))]
    async fn eligible_department_ids(
        &self,
        school_id: Option<SchoolId>,
        service_keywords: &[String],
    ) -> anyhow::Result<Vec<DepartmentId>> {
        let ids = sqlx::query_scalar::<_, DepartmentId>(
            r#"SELECT d.id
               FROM departments d
               WHERE d.school_id = $1
                  OR d.is_service_department
                  OR EXISTS (
                      SELECT 1 FROM unnest($2::text[]) AS keyword
                      WHERE strpos(d.name, keyword) > 0
                  )
               ORDER BY d.code"#,
        )
        .bind(school_id)
        .bind(service_keywords)
        .fetch_all(&self.db)
        .await?;

        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn active_courses(
        &self,
        level: i32,
        department_ids: &[DepartmentId],
    ) -> anyhow::Result<Vec<Course>> {
        if department_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CourseRow>(
            r#"SELECT
                   c.id,
                   c.code,
                   c.title,
                   c.credit_unit,
                   c.semester,
                   c.level,
                   d.id AS department_id,
                   d.name AS department_name,
                   d.code AS department_code
               FROM courses c
               JOIN departments d ON d.id = c.department_id
               WHERE c.is_active
                 AND c.level = $1
                 AND c.department_id = ANY($2)
               ORDER BY c.semester, c.code"#,
        )
        .bind(level)
        .bind(department_ids)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    #[instrument(skip(self))]
    async fn registrations_for_year(
        &self,
        student_id: StudentId,
        academic_year: &str,
    ) -> anyhow::Result<Vec<CourseRegistration>> {
        let registrations = sqlx::query_as::<_, CourseRegistration>(
            r#"SELECT id, student_id, academic_year, semester, status
               FROM course_registrations
               WHERE student_id = $1 AND academic_year = $2
               ORDER BY semester"#,
        )
        .bind(student_id)
        .bind(academic_year)
        .fetch_all(&self.db)
        .await?;

        Ok(registrations)
    }

    #[instrument(skip(self))]
    async fn selections_for_registrations(
        &self,
        registration_ids: &[CourseRegistrationId],
    ) -> anyhow::Result<Vec<CourseSelection>> {
        let selections = sqlx::query_as::<_, CourseSelection>(
            r#"SELECT id, course_registration_id, course_id
               FROM course_selections
               WHERE course_registration_id = ANY($1)"#,
        )
        .bind(registration_ids)
        .fetch_all(&self.db)
        .await?;

        Ok(selections)
    }
}
