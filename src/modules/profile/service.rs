use anyhow::anyhow;
use tracing::instrument;

use unirecords_core::AppError;
use unirecords_models::{
    Department, DepartmentId, OrgUnitSummary, RoleProfile, School, SchoolId, UserId, UserRole,
};

use crate::repository::AcademicRepository;

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Outcome of loading the role profile for the profile view.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFetch {
    Loaded(RoleProfile),
    Unavailable,
}

impl ProfileFetch {
    pub fn profile(&self) -> Option<&RoleProfile> {
        match self {
            ProfileFetch::Loaded(profile) => Some(profile),
            ProfileFetch::Unavailable => None,
        }
    }
}

fn summary_of_department(department: &Department) -> OrgUnitSummary {
    OrgUnitSummary {
        name: department.name.clone(),
        code: department.code.clone(),
    }
}

fn summary_of_school(school: &School) -> OrgUnitSummary {
    OrgUnitSummary {
        name: school.name.clone(),
        code: school.code.clone(),
    }
}

pub struct ProfileService;

impl ProfileService {
    /// Department and owning school summaries for a role record.
    async fn department_with_school(
        repository: &dyn AcademicRepository,
        department_id: DepartmentId,
    ) -> Result<(Option<OrgUnitSummary>, Option<OrgUnitSummary>), AppError> {
        let Some(department) = repository.find_department(department_id).await? else {
            return Ok((None, None));
        };

        let school = repository.find_school(department.school_id).await?;

        Ok((
            Some(summary_of_department(&department)),
            school.as_ref().map(summary_of_school),
        ))
    }

    async fn school_only(
        repository: &dyn AcademicRepository,
        school_id: SchoolId,
    ) -> Result<Option<OrgUnitSummary>, AppError> {
        let school = repository.find_school(school_id).await?;
        Ok(school.as_ref().map(summary_of_school))
    }

    #[instrument(skip(repository))]
    pub async fn get_role_profile(
        repository: &dyn AcademicRepository,
        user_id: UserId,
    ) -> Result<RoleProfile, AppError> {
        let user = repository
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND_MESSAGE)))?;

        let mut profile = RoleProfile::bare(user.role, Some(user.created_at));

        match user.role {
            UserRole::Student => {
                if let Some(student) = repository.find_student_by_user(user_id).await? {
                    let (department, school) =
                        Self::department_with_school(repository, student.department_id).await?;
                    profile.matric_number = Some(student.matric_number);
                    profile.level = Some(student.level);
                    profile.department = department;
                    profile.school = school;
                }
            }
            UserRole::Lecturer => {
                if let Some(lecturer) = repository.find_lecturer_by_user(user_id).await? {
                    let (department, school) =
                        Self::department_with_school(repository, lecturer.department_id).await?;
                    profile.staff_id = Some(lecturer.staff_id);
                    profile.department = department;
                    profile.school = school;
                }
            }
            UserRole::DepartmentAdmin | UserRole::SchoolAdmin | UserRole::SenateAdmin => {
                if let Some(admin) = repository.find_admin_by_user(user_id).await? {
                    profile.admin_id = Some(admin.admin_id);
                    if let Some(department_id) = admin.department_id {
                        let (department, school) =
                            Self::department_with_school(repository, department_id).await?;
                        profile.department = department;
                        profile.school = school;
                    } else if let Some(school_id) = admin.school_id {
                        profile.school = Self::school_only(repository, school_id).await?;
                    }
                }
            }
        }

        Ok(profile)
    }

    /// Role profile for the profile view. Failures are logged and reported
    /// as [`ProfileFetch::Unavailable`] so the rest of the view still renders.
    pub async fn fetch_for_view(
        repository: &dyn AcademicRepository,
        user_id: UserId,
    ) -> ProfileFetch {
        match Self::get_role_profile(repository, user_id).await {
            Ok(profile) => ProfileFetch::Loaded(profile),
            Err(err) => {
                tracing::warn!(
                    user_id = %user_id,
                    status = %err.status.as_u16(),
                    error = ?err.error,
                    "Role profile unavailable for profile view"
                );
                ProfileFetch::Unavailable
            }
        }
    }
}
