//! # Inspection Options
//!
//! Options for one inspection run, loaded from a YAML/JSON file or from the
//! environment.
//!
//! ## Environment Variables
//!
//! ### `TYPEGRAPH_MODULES`
//!
//! Comma-separated list of searched modules. Types declared elsewhere are out
//! of scope unless they are collections or generics.
//!
//! ### `TYPEGRAPH_CONTROLLER_SUFFIX`
//!
//! Suffix removed from controller names before `[controller]` substitution.
//!
//! Default: `Controller`
//!
//! ## Example File
//!
//! ```yaml
//! searched_modules: [Shop, Shop.Contracts]
//! controller_suffix: Controller
//! extra_entry_points: ["Shop.AuditEvent"]
//! ```

use crate::api::DEFAULT_CONTROLLER_SUFFIX;
use crate::facts::TypeKey;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// Modules whose declared types are in scope.
    pub searched_modules: Vec<String>,
    pub controller_suffix: String,
    /// Types tracked even when no endpoint mentions them. Seeded first.
    pub extra_entry_points: Vec<TypeKey>,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            searched_modules: Vec::new(),
            controller_suffix: DEFAULT_CONTROLLER_SUFFIX.to_string(),
            extra_entry_points: Vec::new(),
        }
    }
}

impl InspectOptions {
    pub fn new<I, M>(modules: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        InspectOptions {
            searched_modules: modules.into_iter().map(Into::into).collect(),
            ..InspectOptions::default()
        }
    }

    pub fn with_entry_point(mut self, key: impl Into<TypeKey>) -> Self {
        self.extra_entry_points.push(key.into());
        self
    }

    /// Load options from environment variables.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Load options through `lookup` instead of the process environment.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = InspectOptions::default();
        if let Some(modules) = lookup("TYPEGRAPH_MODULES") {
            options.searched_modules = split_list(&modules);
        }
        if let Some(suffix) = lookup("TYPEGRAPH_CONTROLLER_SUFFIX") {
            options.controller_suffix = suffix.trim().to_string();
        }
        options
    }

    /// Load options from a YAML (`.yaml`/`.yml`) or JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read options file {}", path.display()))?;
        let yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        let options = if yaml {
            serde_yaml::from_str(&content).context("failed to parse YAML options")?
        } else {
            serde_json::from_str(&content).context("failed to parse JSON options")?
        };
        Ok(options)
    }

    /// Add modules not already searched, keeping order.
    pub fn extend_modules(&mut self, modules: impl IntoIterator<Item = String>) {
        for module in modules {
            if !self.searched_modules.contains(&module) {
                self.searched_modules.push(module);
            }
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
