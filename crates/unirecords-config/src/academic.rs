//! Academic calendar and course-eligibility configuration.
//!
//! # Environment Variables
//!
//! - `ACADEMIC_YEAR`: current session token (default `2024/2025`)
//! - `SERVICE_DEPARTMENT_KEYWORDS`: comma separated department-name fragments
//!   whose courses every student may take (default
//!   `General Studies,Mathematics,Physics,Chemistry`). Setting it to an empty
//!   value turns name matching off; tagged service departments still apply.

use unirecords_core::{AcademicYear, AcademicYearError};

use crate::{env_lookup, split_csv};

pub const DEFAULT_SERVICE_DEPARTMENT_KEYWORDS: [&str; 4] =
    ["General Studies", "Mathematics", "Physics", "Chemistry"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcademicConfig {
    pub current_year: AcademicYear,
    pub service_department_keywords: Vec<String>,
}

impl Default for AcademicConfig {
    fn default() -> Self {
        Self {
            current_year: AcademicYear::default(),
            service_department_keywords: DEFAULT_SERVICE_DEPARTMENT_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AcademicConfig {
    pub fn from_env() -> Result<Self, AcademicYearError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AcademicYearError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("ACADEMIC_YEAR") {
            config.current_year = raw.parse()?;
        }

        if let Some(raw) = lookup("SERVICE_DEPARTMENT_KEYWORDS") {
            config.service_department_keywords = split_csv(&raw);
            if config.service_department_keywords.is_empty() {
                tracing::warn!(
                    "SERVICE_DEPARTMENT_KEYWORDS is empty; only tagged service departments will be shared"
                );
            }
        }

        Ok(config)
    }

    /// Whether a department name contains one of the service keywords.
    ///
    /// Matching is a case-sensitive substring test, the same test the
    /// Postgres query applies with `strpos`.
    pub fn matches_service_keyword(&self, department_name: &str) -> bool {
        self.service_department_keywords
            .iter()
            .any(|keyword| department_name.contains(keyword.as_str()))
    }
}
