//! Academic session token.
//!
//! Registrations are keyed by a token of the form `YYYY/YYYY` where the second
//! year immediately follows the first (e.g. `2024/2025`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Academic year used when nothing else is configured.
pub const DEFAULT_ACADEMIC_YEAR: &str = "2024/2025";

/// Serialized as its `YYYY/YYYY` string. Embedding types document it with
/// `#[schema(value_type = String)]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AcademicYear {
    start: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcademicYearError {
    #[error("Invalid academic year '{0}': expected the form YYYY/YYYY")]
    Malformed(String),
    #[error("Invalid academic year '{start}/{end}': the second year must follow the first")]
    NotConsecutive { start: i32, end: i32 },
}

impl AcademicYear {
    /// Academic year beginning in `start` (`2024` → `2024/2025`).
    pub const fn starting(start: i32) -> Self {
        Self { start }
    }

    pub fn start_year(&self) -> i32 {
        self.start
    }

    pub fn end_year(&self) -> i32 {
        self.start + 1
    }

    pub fn next(&self) -> Self {
        Self::starting(self.start + 1)
    }

    pub fn previous(&self) -> Self {
        Self::starting(self.start - 1)
    }
}

fn parse_year(part: &str) -> Option<i32> {
    if part.len() != 4 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for AcademicYear {
    type Err = AcademicYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (start, end) = raw
            .split_once('/')
            .and_then(|(a, b)| Some((parse_year(a)?, parse_year(b)?)))
            .ok_or_else(|| AcademicYearError::Malformed(raw.to_string()))?;

        if end != start + 1 {
            return Err(AcademicYearError::NotConsecutive { start, end });
        }

        Ok(Self { start })
    }
}

impl Default for AcademicYear {
    fn default() -> Self {
        Self::starting(2024)
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:04}", self.start, self.end_year())
    }
}

impl TryFrom<String> for AcademicYear {
    type Error = AcademicYearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AcademicYear> for String {
    fn from(year: AcademicYear) -> Self {
        year.to_string()
    }
}
