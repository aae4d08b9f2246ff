//! Academic structure: schools, departments, role records, courses and
//! course registrations.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

use crate::ids::{
    AdminRecordId, CourseId, CourseRegistrationId, CourseSelectionId, DepartmentId, LecturerId,
    SchoolId, StudentId, UserId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
    pub school_id: SchoolId,
    /// Tagged as offering courses to students of every school.
    pub is_service_department: bool,
}

/// Department fields embedded in each course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
}

impl From<&Department> for DepartmentSummary {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            code: department.code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub user_id: UserId,
    pub matric_number: String,
    pub level: i32,
    pub department_id: DepartmentId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    pub id: LecturerId,
    pub user_id: UserId,
    pub staff_id: String,
    pub department_id: DepartmentId,
}

/// Administrator record. Department admins carry a department, school admins
/// a school, senate admins neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminRecordId,
    pub user_id: UserId,
    pub admin_id: String,
    pub department_id: Option<DepartmentId>,
    pub school_id: Option<SchoolId>,
}

/// Teaching semester. Ordering follows the calendar: `First < Second`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    sqlx::Type,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "semester", rename_all = "UPPERCASE")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::First, Semester::Second];

    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::First => "FIRST",
            Semester::Second => "SECOND",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub title: String,
    pub credit_unit: i32,
    pub semester: Semester,
    pub level: i32,
    pub department: DepartmentSummary,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "registration_status", rename_all = "UPPERCASE")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

/// A student's registration for one semester of one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRegistration {
    pub id: CourseRegistrationId,
    pub student_id: StudentId,
    pub academic_year: String,
    pub semester: Semester,
    pub status: RegistrationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSelection {
    pub id: CourseSelectionId,
    pub course_registration_id: CourseRegistrationId,
    pub course_id: CourseId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_order_and_wire_format() {
        assert!(Semester::First < Semester::Second);
        assert_eq!(serde_json::to_string(&Semester::First).unwrap(), r#""FIRST""#);
        assert_eq!(
            serde_json::from_str::<Semester>(r#""SECOND""#).unwrap(),
            Semester::Second
        );
    }

    #[test]
    fn test_registration_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::Approved).unwrap(),
            r#""APPROVED""#
        );
    }

    #[test]
    fn test_course_serializes_camel_case() {
        let course = Course {
            id: CourseId::from_u128(1),
            code: "CSC201".into(),
            title: "Data Structures".into(),
            credit_unit: 3,
            semester: Semester::First,
            level: 200,
            department: DepartmentSummary {
                id: DepartmentId::from_u128(2),
                name: "Computer Science".into(),
                code: "CSC".into(),
            },
        };
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["creditUnit"], 3);
        assert_eq!(value["semester"], "FIRST");
        assert_eq!(value["department"]["code"], "CSC");
    }
}
