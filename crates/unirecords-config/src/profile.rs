use std::path::PathBuf;

use crate::env_lookup;

#[derive(Clone, Debug, Default)]
pub struct ProfileConfig {
    /// Replacement for the built-in role presentation catalog.
    pub presentation_path: Option<PathBuf>,
}

impl ProfileConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            presentation_path: lookup("PROFILE_PRESENTATION_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
