//! Seed rows and seeding configuration.

use unirecords_models::{CourseId, DepartmentId, SchoolId, Semester, StudentId, UserId};

pub struct SchoolSeed {
    pub name: String,
    pub code: String,
}

pub struct DepartmentSeed {
    pub name: String,
    pub code: String,
    pub school_id: SchoolId,
    pub is_service_department: bool,
}

/// A department after insertion, with what course and student generation need.
#[derive(Clone)]
pub struct SeededDepartment {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
    pub is_service_department: bool,
}

pub struct CourseSeed {
    pub code: String,
    pub title: String,
    pub credit_unit: i32,
    pub semester: Semester,
    pub level: i32,
    pub department_id: DepartmentId,
}

#[derive(Clone, Copy)]
pub struct SeededCourse {
    pub id: CourseId,
    pub department_id: DepartmentId,
    pub level: i32,
    pub semester: Semester,
}

pub struct StudentSeed {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub matric_number: String,
    pub level: i32,
    pub department_id: DepartmentId,
}

#[derive(Clone, Copy)]
pub struct SeededStudent {
    pub id: StudentId,
    pub user_id: UserId,
    pub level: i32,
    pub department_id: DepartmentId,
}

#[derive(Clone)]
pub struct SeedConfig {
    pub num_schools: usize,
    pub departments_per_school: usize,
    /// Course levels, e.g. `[100, 200, 300, 400]`.
    pub levels: Vec<i32>,
    pub courses_per_semester: usize,
    pub students_per_department: usize,
    /// Academic year for the generated registrations.
    pub academic_year: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_schools: 3,
            departments_per_school: 4,
            levels: vec![100, 200, 300, 400],
            courses_per_semester: 4,
            students_per_department: 20,
            academic_year: unirecords_core::academic_year::DEFAULT_ACADEMIC_YEAR.to_string(),
        }
    }
}

impl SeedConfig {
    pub fn new(num_schools: usize) -> Self {
        Self {
            num_schools,
            ..Default::default()
        }
    }

    pub fn total_departments(&self) -> usize {
        self.num_schools * self.departments_per_school
    }

    /// Courses generated per department across every level and both semesters.
    pub fn courses_per_department(&self) -> usize {
        self.levels.len() * Semester::ALL.len() * self.courses_per_semester
    }

    pub fn total_students(&self) -> usize {
        self.total_departments() * self.students_per_department
    }
}
