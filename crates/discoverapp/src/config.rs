//! # Configuration
//!
//! Session defaults for the discovery engine, declared with [`confique`] and
//! loaded in layers by [`clapfig`].
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `DISCOVER__DEFAULT_DOMAIN`, `DISCOVER__TAG_MATCH`, etc.
//! 2. **Project Config**: `discover.toml` in the working directory.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_domain` | `artists` | Domain tab a session starts on |
//! | `default_role` | `regular` | Viewer role a session starts with |
//! | `tag_match` | `all` | How selected tags combine (`all` or `any`) |
//! | `close_on_select` | `true` | Whether the mobile drawer closes after a pick |
//!
//! Values are kept as written and parsed on use, so a typo is reported with
//! the offending key instead of failing the whole load.

use crate::error::{DiscoverError, Result};
use crate::model::{Domain, TagMatch, ViewerRole};
use crate::store::FilterState;
use clapfig::{Clapfig, SearchMode, SearchPath};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "discover.toml";

/// Configuration for discover, stored in `discover.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiscoverConfig {
    /// Domain tab shown when a session starts (e.g. "artists", "venues").
    #[config(default = "artists")]
    pub default_domain: String,

    /// Viewer role a session starts with: regular, artist, venue, brand or resource.
    #[config(default = "regular")]
    pub default_role: String,

    /// "all" requires every selected tag, "any" requires at least one.
    #[config(default = "all")]
    pub tag_match: String,

    /// Close the mobile drawer when a tag is picked.
    #[config(default = true)]
    pub close_on_select: bool,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            default_domain: "artists".to_string(),
            default_role: "regular".to_string(),
            tag_match: "all".to_string(),
            close_on_select: true,
        }
    }
}

fn invalid(key: &str, reason: impl std::fmt::Display) -> DiscoverError {
    DiscoverError::Config(format!("{key}: {reason}"))
}

impl DiscoverConfig {
    /// Load the layered configuration. Missing files are skipped.
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        let config: DiscoverConfig = Clapfig::builder()
            .app_name("discover")
            .file_name(CONFIG_FILE)
            .search_paths(paths.search_paths())
            .search_mode(SearchMode::Merge)
            .load()
            .map_err(|e| DiscoverError::Config(e.to_string()))?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn domain(&self) -> Result<Domain> {
        Domain::lookup(&self.default_domain)
            .ok_or_else(|| invalid("default_domain", format!("unknown domain '{}'", self.default_domain)))
    }

    pub fn role(&self) -> Result<ViewerRole> {
        self.default_role
            .parse()
            .map_err(|e| invalid("default_role", e))
    }

    pub fn tag_match(&self) -> Result<TagMatch> {
        self.tag_match.parse().map_err(|e| invalid("tag_match", e))
    }

    /// The state a new session starts from.
    pub fn initial_state(&self) -> Result<FilterState> {
        Ok(FilterState::with_defaults(
            self.domain()?,
            self.role()?,
            self.tag_match()?,
        ))
    }
}

/// Directories searched for `discover.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPaths {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// The OS config directory plus `project_dir`.
    pub fn discover(project_dir: &Path) -> Self {
        Self {
            global: ProjectDirs::from("", "", "discover").map(|d| d.config_dir().to_path_buf()),
            project: Some(project_dir.to_path_buf()),
        }
    }

    /// Only the given project directory; used by tests and `--config-dir`.
    pub fn project_only(project_dir: &Path) -> Self {
        Self {
            global: None,
            project: Some(project_dir.to_path_buf()),
        }
    }

    /// Global first so the project file overrides it.
    fn search_paths(&self) -> Vec<SearchPath> {
        self.global
            .iter()
            .chain(self.project.iter())
            .cloned()
            .map(SearchPath::Path)
            .collect()
    }
}
