//! # Unirecords Models
//!
//! Domain models and DTOs for the unirecords API.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed entity ids
//! - [`users`]: Accounts and roles
//! - [`academics`]: Schools, departments, role records, courses, registrations
//! - [`course_load`]: Student course-load payload
//! - [`profile`]: Role profile and profile view
//! - [`auth`]: Login DTOs

pub mod academics;
pub mod auth;
pub mod course_load;
pub mod ids;
pub mod profile;
pub mod users;

pub use academics::{
    Admin, Course, CourseRegistration, CourseSelection, Department, DepartmentSummary, Lecturer,
    RegistrationStatus, School, Semester, Student,
};
pub use auth::{LoginRequest, LoginResponse, LoginUser};
pub use course_load::{CourseLoadQuery, CourseLoadResponse, SemesterCourseLoad};
pub use ids::{
    AdminRecordId, CourseId, CourseRegistrationId, CourseSelectionId, DepartmentId, LecturerId,
    SchoolId, StudentId, UserId,
};
pub use profile::{
    Achievement, ContactEntry, ContactField, OrgUnitSummary, ProfileDataStatus, ProfileHeader,
    ProfileView, RolePresentation, RoleProfile, Statistic,
};
pub use users::{UnknownRole, User, UserCredentials, UserRole};
