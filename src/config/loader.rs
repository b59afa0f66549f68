//! Configuration structures and loading logic.

use crate::api::PAGE_SIZE;
use crate::config::modes::{CollisionPolicy, FailurePolicy};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchLimits,

    #[serde(default)]
    pub download: DownloadConfig,
}

/// Search API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (the search path is appended).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application bearer token.
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Paging limits for a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Hard cap on the number of pages requested.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Stop paging once more than this many images have been found.
    #[serde(default = "default_max_images")]
    pub max_images: usize,

    /// Posts requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Download behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Base directory the per-query folder is created in.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    #[serde(default)]
    pub collision_policy: CollisionPolicy,

    /// Whether to show a progress bar while downloading.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bearer_token: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            max_images: default_max_images(),
            page_size: default_page_size(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: None,
            failure_policy: FailurePolicy::default(),
            collision_policy: CollisionPolicy::default(),
            show_progress: true,
        }
    }
}

fn default_base_url() -> String {
    "https://api.twitter.com/1.1".to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_max_pages() -> u32 {
    15
}

fn default_max_images() -> usize {
    50
}

fn default_page_size() -> u32 {
    PAGE_SIZE
}

fn default_true() -> bool {
    true
}

/// Platform-specific default location of the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the configuration for a run.
    ///
    /// An explicitly given file must exist. Otherwise the platform default
    /// location is tried, falling back to built-in defaults when absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Get the effective base download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.download
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
