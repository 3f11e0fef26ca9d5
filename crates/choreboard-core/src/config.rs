//! TOML-based dashboard configuration.
//!
//! Stores display preferences:
//! - How many tasks the "recently completed" / "pending" highlight lists show
//! - Display labels for the household members (so a family can use real
//!   names instead of the generic "Parent A" / "Parent B")
//!
//! Configuration is stored at `~/.config/choreboard/config.toml`. A missing
//! file means defaults; a present-but-broken file is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::task::Member;

/// Display labels for the three household members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLabels {
    #[serde(default = "default_parent_a_label")]
    pub parent_a: String,
    #[serde(default = "default_parent_b_label")]
    pub parent_b: String,
    #[serde(default = "default_both_label")]
    pub both: String,
}

impl MemberLabels {
    /// Label for a member.
    pub fn get(&self, member: Member) -> &str {
        match member {
            Member::ParentA => &self.parent_a,
            Member::ParentB => &self.parent_b,
            Member::Both => &self.both,
        }
    }
}

impl Default for MemberLabels {
    fn default() -> Self {
        Self {
            parent_a: default_parent_a_label(),
            parent_b: default_parent_b_label(),
            both: default_both_label(),
        }
    }
}

/// Dashboard configuration.
///
/// Serialized to/from TOML at `~/.config/choreboard/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Cap for the recently-completed and pending highlight lists.
    #[serde(default = "default_highlight_limit")]
    pub highlight_limit: usize,
    #[serde(default)]
    pub labels: MemberLabels,
}

// Default functions
fn default_highlight_limit() -> usize {
    5
}
fn default_parent_a_label() -> String {
    "Parent A".into()
}
fn default_parent_b_label() -> String {
    "Parent B".into()
}
fn default_both_label() -> String {
    "Both".into()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            highlight_limit: default_highlight_limit(),
            labels: MemberLabels::default(),
        }
    }
}

impl DashboardConfig {
    /// Default config file path, `~/.config/choreboard/config.toml`.
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("choreboard")
            .join("config.toml")
    }

    /// Load from the default path; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DashboardConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
