//! Role presentation catalog.
//!
//! Achievements, statistics and contact details shown on the profile page
//! are plain data. The built-in catalog ships in
//! `config/profile_presentation.json`; `PROFILE_PRESENTATION_PATH` points at
//! a replacement document with the same shape:
//!
//! ```json
//! {
//!   "roles": { "STUDENT": { "achievements": [], "stats": [], "contact": [] } },
//!   "aliases": { "SCHOOL_ADMIN": "ADMIN" }
//! }
//! ```

use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::HashMap;

use unirecords_config::ProfileConfig;
use unirecords_models::{RolePresentation, UserRole};

const EMBEDDED_CATALOG: &str = include_str!("../../../config/profile_presentation.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PresentationCatalog {
    #[serde(default)]
    roles: HashMap<String, RolePresentation>,
    /// Role name → catalog entry it shares.
    #[serde(default)]
    aliases: HashMap<String, String>,
}

impl PresentationCatalog {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let catalog: Self =
            serde_json::from_str(raw).context("Invalid profile presentation catalog")?;

        for (alias, target) in &catalog.aliases {
            if !catalog.roles.contains_key(target) {
                bail!(
                    "Profile presentation alias {} points at unknown role {}",
                    alias,
                    target
                );
            }
        }

        Ok(catalog)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Loads the override file when one is configured, the built-in catalog
    /// otherwise.
    pub fn load(config: &ProfileConfig) -> anyhow::Result<Self> {
        match &config.presentation_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).with_context(|| {
                    format!(
                        "Failed to read profile presentation catalog {}",
                        path.display()
                    )
                })?;
                let catalog = Self::from_json(&raw)?;
                tracing::info!(path = %path.display(), "Loaded profile presentation catalog");
                Ok(catalog)
            }
            None => Self::embedded(),
        }
    }

    /// Entry for an account role. Names outside [`UserRole`], alias targets
    /// such as `ADMIN` included, have no entry.
    pub fn for_role(&self, role: &str) -> Option<&RolePresentation> {
        if !UserRole::ALL.iter().any(|known| known.as_str() == role) {
            return None;
        }

        self.roles.get(role).or_else(|| {
            self.aliases
                .get(role)
                .and_then(|target| self.roles.get(target))
        })
    }
}
