//! User accounts and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::ids::UserId;

/// Role attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Lecturer,
    DepartmentAdmin,
    SchoolAdmin,
    SenateAdmin,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Student,
        UserRole::Lecturer,
        UserRole::DepartmentAdmin,
        UserRole::SchoolAdmin,
        UserRole::SenateAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Lecturer => "LECTURER",
            UserRole::DepartmentAdmin => "DEPARTMENT_ADMIN",
            UserRole::SchoolAdmin => "SCHOOL_ADMIN",
            UserRole::SenateAdmin => "SENATE_ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            UserRole::DepartmentAdmin | UserRole::SchoolAdmin | UserRole::SenateAdmin
        )
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// A login account. The password hash is never part of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account row used only while checking a login attempt.
#[derive(Clone, FromRow)]
pub struct UserCredentials {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::DepartmentAdmin).unwrap(),
            r#""DEPARTMENT_ADMIN""#
        );
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("STUDENT".parse::<UserRole>().unwrap(), UserRole::Student);
        assert_eq!(
            "senate_admin".parse::<UserRole>().unwrap(),
            UserRole::SenateAdmin
        );
        assert!("JANITOR".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_admin_roles() {
        assert!(UserRole::SchoolAdmin.is_admin());
        assert!(UserRole::DepartmentAdmin.is_admin());
        assert!(!UserRole::Lecturer.is_admin());
        assert!(!UserRole::Student.is_admin());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = UserCredentials {
            id: UserId::new(),
            name: "Ada".into(),
            email: "ada@uni.edu".into(),
            role: UserRole::Student,
            password: "$2b$12$secret".into(),
        };
        assert!(!format!("{:?}", credentials).contains("secret"));
    }
}
