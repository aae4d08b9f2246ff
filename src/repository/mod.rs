//! Persistence gateway.
//!
//! Handlers and services only see [`AcademicRepository`]; the server wires
//! in [`PgAcademicRepository`], tests an in-memory implementation.

pub mod postgres;

use async_trait::async_trait;
use unirecords_models::{
    Admin, Course, CourseRegistration, CourseRegistrationId, CourseSelection, Department,
    DepartmentId, Lecturer, School, SchoolId, Student, StudentId, User, UserCredentials, UserId,
};

pub use postgres::PgAcademicRepository;

/// Read access to accounts and academic records.
///
/// Every method is a single query. A missing row is `Ok(None)`, never an
/// error.
#[async_trait]
pub trait AcademicRepository: Send + Sync {
    async fn find_user(&self, id: UserId) -> anyhow::Result<Option<User>>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<UserCredentials>>;

    async fn find_student_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Student>>;

    async fn find_lecturer_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Lecturer>>;

    async fn find_admin_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Admin>>;

    async fn find_department(&self, id: DepartmentId) -> anyhow::Result<Option<Department>>;

    async fn find_school(&self, id: SchoolId) -> anyhow::Result<Option<School>>;

    /// Departments whose courses a student of `school_id` may take: the
    /// school's own departments, tagged service departments, and departments
    /// whose name contains one of `service_keywords` (case-sensitive).
    async fn eligible_department_ids(
        &self,
        school_id: Option<SchoolId>,
        service_keywords: &[String],
    ) -> anyhow::Result<Vec<DepartmentId>>;

    /// Active courses at `level` offered by `department_ids`, ordered by
    /// semester then code.
    async fn active_courses(
        &self,
        level: i32,
        department_ids: &[DepartmentId],
    ) -> anyhow::Result<Vec<Course>>;

    async fn registrations_for_year(
        &self,
        student_id: StudentId,
        academic_year: &str,
    ) -> anyhow::Result<Vec<CourseRegistration>>;

    async fn selections_for_registrations(
        &self,
        registration_ids: &[CourseRegistrationId],
    ) -> anyhow::Result<Vec<CourseSelection>>;
}
