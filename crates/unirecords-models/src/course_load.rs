//! Student course-load payload.

use serde::{Deserialize, Serialize};
use unirecords_core::AcademicYear;
use utoipa::{IntoParams, ToSchema};

use crate::academics::{Course, RegistrationStatus};
use crate::ids::{CourseId, DepartmentId};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CourseLoadQuery {
    /// Academic year to report (`YYYY/YYYY`). Defaults to the current year.
    pub academic_year: Option<String>,
}

/// One semester of a student's course load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemesterCourseLoad {
    /// Sum of `creditUnit` over `courses`.
    pub total_credits: i64,
    /// Eligible courses for the semester, ordered by code.
    pub courses: Vec<Course>,
    /// Registration status, `null` when the student has not registered.
    pub status: Option<RegistrationStatus>,
    /// Ids from `courses` the student selected in this semester's registration.
    pub registered_course_ids: Vec<CourseId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseLoadResponse {
    pub level: i32,
    pub department_id: DepartmentId,
    pub first_semester: SemesterCourseLoad,
    pub second_semester: SemesterCourseLoad,
    #[schema(value_type = String, example = "2024/2025")]
    pub academic_year: AcademicYear,
}
