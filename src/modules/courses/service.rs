use anyhow::anyhow;
use std::collections::HashSet;
use tracing::instrument;

use unirecords_config::AcademicConfig;
use unirecords_core::{AcademicYear, AppError};
use unirecords_models::{
    Course, CourseId, CourseLoadResponse, CourseRegistration, CourseRegistrationId,
    CourseSelection, SchoolId, Semester, SemesterCourseLoad, UserId,
};
use unirecords_observability::track_course_load_served;

use crate::repository::AcademicRepository;

pub const STUDENT_NOT_FOUND_MESSAGE: &str = "Student profile not found";

/// Splits semester-ordered courses into first and second semester lists,
/// keeping their relative order.
pub fn partition_by_semester(courses: Vec<Course>) -> (Vec<Course>, Vec<Course>) {
    courses
        .into_iter()
        .partition(|course| course.semester == Semester::First)
}

pub fn total_credits(courses: &[Course]) -> i64 {
    courses.iter().map(|c| i64::from(c.credit_unit)).sum()
}

/// Ids of `courses`, in course order, that were selected under `registration`.
pub fn registered_course_ids(
    courses: &[Course],
    registration: Option<&CourseRegistration>,
    selections: &[CourseSelection],
) -> Vec<CourseId> {
    let Some(registration) = registration else {
        return Vec::new();
    };

    let selected: HashSet<CourseId> = selections
        .iter()
        .filter(|s| s.course_registration_id == registration.id)
        .map(|s| s.course_id)
        .collect();

    courses
        .iter()
        .filter(|c| selected.contains(&c.id))
        .map(|c| c.id)
        .collect()
}

pub fn semester_load(
    semester: Semester,
    courses: Vec<Course>,
    registrations: &[CourseRegistration],
    selections: &[CourseSelection],
) -> SemesterCourseLoad {
    let registration = registrations.iter().find(|r| r.semester == semester);

    SemesterCourseLoad {
        total_credits: total_credits(&courses),
        status: registration.map(|r| r.status),
        registered_course_ids: registered_course_ids(&courses, registration, selections),
        courses,
    }
}

pub struct CourseService;

impl CourseService {
    /// Assembles a student's course load for `academic_year`.
    ///
    /// Queries run one after another; any failure aborts with a 500 and no
    /// partial result.
    #[instrument(skip(repository, config))]
    pub async fn get_course_load(
        repository: &dyn AcademicRepository,
        config: &AcademicConfig,
        user_id: UserId,
        academic_year: &AcademicYear,
    ) -> Result<CourseLoadResponse, AppError> {
        let student = repository
            .find_student_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(STUDENT_NOT_FOUND_MESSAGE)))?;

        let department = repository.find_department(student.department_id).await?;
        let school_id: Option<SchoolId> = department.as_ref().map(|d| d.school_id);

        let department_ids = repository
            .eligible_department_ids(school_id, &config.service_department_keywords)
            .await?;

        tracing::info!(
            student_department_id = %student.department_id,
            school_id = ?school_id,
            department_ids = ?department_ids,
            "Resolved eligible departments"
        );

        let courses = repository
            .active_courses(student.level, &department_ids)
            .await?;
        let (first, second) = partition_by_semester(courses);

        let year = academic_year.to_string();
        let registrations = repository
            .registrations_for_year(student.id, &year)
            .await?;

        let selections = if registrations.is_empty() {
            Vec::new()
        } else {
            let registration_ids: Vec<CourseRegistrationId> =
                registrations.iter().map(|r| r.id).collect();
            repository
                .selections_for_registrations(&registration_ids)
                .await?
        };

        track_course_load_served(&year);

        Ok(CourseLoadResponse {
            level: student.level,
            department_id: student.department_id,
            first_semester: semester_load(Semester::First, first, &registrations, &selections),
            second_semester: semester_load(Semester::Second, second, &registrations, &selections),
            academic_year: academic_year.clone(),
        })
    }
}
