//! Shared fixtures for router tests: an in-memory [`AcademicRepository`],
//! token helpers and an app builder.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::bail;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use unirecords::modules::profile::PresentationCatalog;
use unirecords::repository::AcademicRepository;
use unirecords::router::init_router;
use unirecords::state::AppState;
use unirecords_auth::create_access_token;
use unirecords_config::{AcademicConfig, CorsConfig, JwtConfig};
use unirecords_core::{AcademicYear, hash_password};
use unirecords_models::{
    Admin, AdminRecordId, Course, CourseId, CourseRegistration, CourseRegistrationId,
    CourseSelection, CourseSelectionId, Department, DepartmentId, DepartmentSummary, Lecturer,
    LecturerId, RegistrationStatus, School, SchoolId, Semester, Student, StudentId, User,
    UserCredentials, UserId, UserRole,
};

pub const TEST_PASSWORD: &str = "password123";

pub const SCHOOL_ENGINEERING: SchoolId = SchoolId::from_u128(0x10);
pub const SCHOOL_GENERAL: SchoolId = SchoolId::from_u128(0x11);
pub const SCHOOL_ARTS: SchoolId = SchoolId::from_u128(0x12);

pub const DEPT_CSC: DepartmentId = DepartmentId::from_u128(0x20);
pub const DEPT_GST: DepartmentId = DepartmentId::from_u128(0x21);
pub const DEPT_MTH: DepartmentId = DepartmentId::from_u128(0x22);
pub const DEPT_HIS: DepartmentId = DepartmentId::from_u128(0x23);
pub const DEPT_EEE: DepartmentId = DepartmentId::from_u128(0x24);

pub const COURSE_CSC201: CourseId = CourseId::from_u128(0x30);
pub const COURSE_CSC202: CourseId = CourseId::from_u128(0x31);
pub const COURSE_GST101: CourseId = CourseId::from_u128(0x32);
pub const COURSE_MTH201: CourseId = CourseId::from_u128(0x33);
pub const COURSE_HIS201: CourseId = CourseId::from_u128(0x34);
pub const COURSE_CSC301: CourseId = CourseId::from_u128(0x35);
pub const COURSE_CSC203: CourseId = CourseId::from_u128(0x36);

pub const USER_STUDENT: UserId = UserId::from_u128(0x40);
pub const USER_LECTURER: UserId = UserId::from_u128(0x41);
pub const USER_SCHOOL_ADMIN: UserId = UserId::from_u128(0x42);
pub const USER_SENATE_ADMIN: UserId = UserId::from_u128(0x43);
/// Student account without a student record.
pub const USER_UNENROLLED: UserId = UserId::from_u128(0x44);

pub const STUDENT_ID: StudentId = StudentId::from_u128(0x50);

/// In-memory repository mirroring the Postgres queries.
#[derive(Default)]
pub struct InMemoryRepository {
    pub users: Vec<User>,
    pub passwords: Vec<(UserId, String)>,
    pub schools: Vec<School>,
    pub departments: Vec<Department>,
    pub students: Vec<Student>,
    pub lecturers: Vec<Lecturer>,
    pub admins: Vec<Admin>,
    /// Courses with their `is_active` flag.
    pub courses: Vec<(Course, bool)>,
    pub registrations: Vec<CourseRegistration>,
    pub selections: Vec<CourseSelection>,
    failing: AtomicBool,
}

impl InMemoryRepository {
    /// Makes every subsequent query fail.
    pub fn fail_queries(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("connection refused");
        }
        Ok(())
    }

    pub fn department(&self, id: DepartmentId) -> &Department {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .expect("fixture department")
    }

    pub fn add_course(
        &mut self,
        id: CourseId,
        code: &str,
        credit_unit: i32,
        semester: Semester,
        level: i32,
        department_id: DepartmentId,
        is_active: bool,
    ) {
        let department = DepartmentSummary::from(self.department(department_id));
        self.courses.push((
            Course {
                id,
                code: code.to_string(),
                title: format!("{} Course", code),
                credit_unit,
                semester,
                level,
                department,
            },
            is_active,
        ));
    }

    pub fn add_registration(
        &mut self,
        id: u128,
        academic_year: &str,
        semester: Semester,
        status: RegistrationStatus,
        course_ids: &[CourseId],
    ) {
        let registration_id = CourseRegistrationId::from_u128(id);
        self.registrations.push(CourseRegistration {
            id: registration_id,
            student_id: STUDENT_ID,
            academic_year: academic_year.to_string(),
            semester,
            status,
        });
        for (n, course_id) in course_ids.iter().enumerate() {
            self.selections.push(CourseSelection {
                id: CourseSelectionId::from_u128(id * 100 + n as u128),
                course_registration_id: registration_id,
                course_id: *course_id,
            });
        }
    }

    /// Engineering student at level 200 in Computer Science, with courses
    /// from their department, a tagged service department, a keyword-matched
    /// department and an unrelated school.
    pub fn seeded() -> Self {
        let joined = Utc.with_ymd_and_hms(2022, 9, 5, 8, 30, 0).unwrap();
        let mut repo = Self::default();

        repo.schools = vec![
            school(SCHOOL_ENGINEERING, "School of Engineering", "SOE"),
            school(SCHOOL_GENERAL, "School of General Studies", "SGS"),
            school(SCHOOL_ARTS, "School of Arts", "SOA"),
        ];
        repo.departments = vec![
            department(DEPT_CSC, "Computer Science", "CSC", SCHOOL_ENGINEERING, false),
            department(DEPT_EEE, "Electrical Engineering", "EEE", SCHOOL_ENGINEERING, false),
            department(DEPT_GST, "General Studies", "GST", SCHOOL_GENERAL, true),
            department(DEPT_MTH, "Applied Mathematics", "MTH", SCHOOL_ARTS, false),
            department(DEPT_HIS, "History", "HIS", SCHOOL_ARTS, false),
        ];

        repo.add_course(COURSE_CSC202, "CSC202", 3, Semester::Second, 200, DEPT_CSC, true);
        repo.add_course(COURSE_GST101, "GST101", 2, Semester::First, 200, DEPT_GST, true);
        repo.add_course(COURSE_CSC201, "CSC201", 3, Semester::First, 200, DEPT_CSC, true);
        repo.add_course(COURSE_HIS201, "HIS201", 2, Semester::First, 200, DEPT_HIS, true);
        repo.add_course(COURSE_CSC301, "CSC301", 3, Semester::First, 300, DEPT_CSC, true);
        repo.add_course(COURSE_CSC203, "CSC203", 2, Semester::First, 200, DEPT_CSC, false);

        repo.users = vec![
            user(USER_STUDENT, "Ada Obi", "ada@uni.edu", UserRole::Student, joined),
            user(USER_LECTURER, "Grace Hopper", "grace@uni.edu", UserRole::Lecturer, joined),
            user(USER_SCHOOL_ADMIN, "Sam Eze", "sam@uni.edu", UserRole::SchoolAdmin, joined),
            user(USER_SENATE_ADMIN, "Kemi Ade", "kemi@uni.edu", UserRole::SenateAdmin, joined),
            user(USER_UNENROLLED, "New Student", "new@uni.edu", UserRole::Student, joined),
        ];

        repo.students = vec![Student {
            id: STUDENT_ID,
            user_id: USER_STUDENT,
            matric_number: "CSC/2022/0001".into(),
            level: 200,
            department_id: DEPT_CSC,
        }];
        repo.lecturers = vec![Lecturer {
            id: LecturerId::from_u128(0x60),
            user_id: USER_LECTURER,
            staff_id: "STF-042".into(),
            department_id: DEPT_CSC,
        }];
        repo.admins = vec![Admin {
            id: AdminRecordId::from_u128(0x70),
            user_id: USER_SCHOOL_ADMIN,
            admin_id: "ADM-007".into(),
            department_id: None,
            school_id: Some(SCHOOL_ENGINEERING),
        }];

        repo
    }

    /// Adds a Mathematics course that only the keyword heuristic makes eligible.
    pub fn with_keyword_course(mut self) -> Self {
        self.add_course(COURSE_MTH201, "MTH201", 3, Semester::Second, 200, DEPT_MTH, true);
        self
    }

    /// Stores a bcrypt hash of [`TEST_PASSWORD`] for `user_id`.
    pub fn with_password(mut self, user_id: UserId) -> Self {
        let hashed = hash_password(TEST_PASSWORD).expect("hash test password");
        self.passwords.push((user_id, hashed));
        self
    }
}

fn school(id: SchoolId, name: &str, code: &str) -> School {
    School {
        id,
        name: name.into(),
        code: code.into(),
    }
}

fn department(
    id: DepartmentId,
    name: &str,
    code: &str,
    school_id: SchoolId,
    is_service_department: bool,
) -> Department {
    Department {
        id,
        name: name.into(),
        code: code.into(),
        school_id,
        is_service_department,
    }
}

fn user(
    id: UserId,
    name: &str,
    email: &str,
    role: UserRole,
    created_at: chrono::DateTime<Utc>,
) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
        role,
        created_at,
        updated_at: created_at,
    }
}

#[async_trait]
impl AcademicRepository for InMemoryRepository {
    async fn find_user(&self, id: UserId) -> anyhow::Result<Option<User>> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<UserCredentials>> {
        self.check()?;
        let Some(user) = self.users.iter().find(|u| u.email == email) else {
            return Ok(None);
        };
        Ok(self
            .passwords
            .iter()
            .find(|(id, _)| *id == user.id)
            .map(|(_, password)| UserCredentials {
                id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                role: user.role,
                password: password.clone(),
            }))
    }

    async fn find_student_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Student>> {
        self.check()?;
        Ok(self.students.iter().find(|s| s.user_id == user_id).cloned())
    }

    async fn find_lecturer_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Lecturer>> {
        self.check()?;
        Ok(self.lecturers.iter().find(|l| l.user_id == user_id).cloned())
    }

    async fn find_admin_by_user(&self, user_id: UserId) -> anyhow::Result<Option<Admin>> {
        self.check()?;
        Ok(self.admins.iter().find(|a| a.user_id == user_id).cloned())
    }

    async fn find_department(&self, id: DepartmentId) -> anyhow::Result<Option<Department>> {
        self.check()?;
        Ok(self.departments.iter().find(|d| d.id == id).cloned())
    }

    async fn find_school(&self, id: SchoolId) -> anyhow::Result<Option<School>> {
        self.check()?;
        Ok(self.schools.iter().find(|s| s.id == id).cloned())
    }

    async fn eligible_department_ids(
        &self,
        school_id: Option<SchoolId>,
        service_keywords: &[String],
    ) -> anyhow::Result<Vec<DepartmentId>> {
        self.check()?;
        Ok(self
            .departments
            .iter()
            .filter(|d| {
                Some(d.school_id) == school_id
                    || d.is_service_department
                    || service_keywords
                        .iter()
                        .any(|keyword| d.name.contains(keyword.as_str()))
            })
            .map(|d| d.id)
            .collect())
    }

    async fn active_courses(
        &self,
        level: i32,
        department_ids: &[DepartmentId],
    ) -> anyhow::Result<Vec<Course>> {
        self.check()?;
        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .filter(|(c, active)| {
                *active && c.level == level && department_ids.contains(&c.department.id)
            })
            .map(|(c, _)| c.clone())
            .collect();
        courses.sort_by(|a, b| (a.semester, &a.code).cmp(&(b.semester, &b.code)));
        Ok(courses)
    }

    async fn registrations_for_year(
        &self,
        student_id: StudentId,
        academic_year: &str,
    ) -> anyhow::Result<Vec<CourseRegistration>> {
        self.check()?;
        Ok(self
            .registrations
            .iter()
            .filter(|r| r.student_id == student_id && r.academic_year == academic_year)
            .cloned()
            .collect())
    }

    async fn selections_for_registrations(
        &self,
        registration_ids: &[CourseRegistrationId],
    ) -> anyhow::Result<Vec<CourseSelection>> {
        self.check()?;
        Ok(self
            .selections
            .iter()
            .filter(|s| registration_ids.contains(&s.course_registration_id))
            .cloned()
            .collect())
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state(repository: Arc<InMemoryRepository>) -> AppState {
    AppState {
        repository,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        academic_config: AcademicConfig {
            current_year: AcademicYear::starting(2024),
            ..AcademicConfig::default()
        },
        presentation: Arc::new(PresentationCatalog::embedded().expect("embedded catalog")),
    }
}

pub fn setup_test_app(repository: Arc<InMemoryRepository>) -> Router {
    init_router(test_state(repository))
}

/// Bearer token for a fixture user.
pub fn token_for(repo: &InMemoryRepository, user_id: UserId) -> String {
    let user = repo
        .users
        .iter()
        .find(|u| u.id == user_id)
        .expect("fixture user");
    create_access_token(
        user.id.into_inner(),
        &user.email,
        &user.name,
        user.role.as_str(),
        &test_jwt_config(),
    )
    .expect("create token")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
