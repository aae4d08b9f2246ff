//! Role-scoped profile payload and the profile view model built from it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::users::UserRole;

/// Name and code of a department or school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitSummary {
    pub name: String,
    pub code: String,
}

/// Payload of `GET /api/user/profile`. Fields the role does not carry are
/// omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<OrgUnitSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<OrgUnitSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matric_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
}

impl RoleProfile {
    /// Profile with only the role and join date, used when the role record
    /// is missing.
    pub fn bare(role: UserRole, joined_at: Option<DateTime<Utc>>) -> Self {
        Self {
            role,
            joined_at,
            department: None,
            school: None,
            matric_number: None,
            level: None,
            staff_id: None,
            admin_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileDataStatus {
    Loaded,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    /// Icon name understood by the client (e.g. `award`).
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Statistic {
    pub label: String,
    pub value: String,
}

/// Contact field as stored in the presentation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactField {
    pub key: String,
    pub value: String,
}

/// Contact field with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactEntry {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Static achievements, statistics and contact details shown for a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RolePresentation {
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub stats: Vec<Statistic>,
    #[serde(default)]
    pub contact: Vec<ContactField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileHeader {
    pub name: String,
    pub initials: String,
    pub email: String,
    pub role: String,
    pub avatar_url: String,
    pub subtitle: String,
    pub location: String,
    pub joined: NaiveDate,
    pub identifiers: Vec<String>,
}

/// Payload of `GET /api/user/profile/view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub data_status: ProfileDataStatus,
    pub header: ProfileHeader,
    pub achievements: Vec<Achievement>,
    pub statistics: Vec<Statistic>,
    pub contact: Vec<ContactEntry>,
    /// Fetched role profile; `{}` when it could not be loaded.
    #[serde(serialize_with = "empty_object_when_none")]
    #[schema(value_type = Object)]
    pub profile: Option<RoleProfile>,
}

fn empty_object_when_none<S>(profile: &Option<RoleProfile>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;

    match profile {
        Some(profile) => profile.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
