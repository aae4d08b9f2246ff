use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use unirecords_core::ErrorResponse;
use unirecords_models::{
    Achievement, ContactEntry, Course, CourseLoadResponse, DepartmentSummary, LoginRequest,
    LoginResponse, LoginUser, OrgUnitSummary, ProfileDataStatus, ProfileHeader, ProfileView,
    RegistrationStatus, RoleProfile, Semester, SemesterCourseLoad, Statistic, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::courses::controller::get_student_courses,
        crate::modules::profile::controller::get_profile,
        crate::modules::profile::controller::get_profile_view,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            LoginUser,
            UserRole,
            Course,
            DepartmentSummary,
            Semester,
            RegistrationStatus,
            SemesterCourseLoad,
            CourseLoadResponse,
            OrgUnitSummary,
            RoleProfile,
            ProfileDataStatus,
            ProfileHeader,
            Achievement,
            Statistic,
            ContactEntry,
            ProfileView,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User authentication endpoints"),
        (name = "Student Courses", description = "Course load and registration state for students"),
        (name = "Profile", description = "Role profile and profile page endpoints")
    ),
    info(
        title = "Unirecords API",
        version = "0.1.0",
        description = "Academic records API: student course loads and role-aware user profiles.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
