//! Configuration module for tweet-image-search.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Download policy definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{default_config_path, ApiConfig, Config, DownloadConfig, SearchLimits};
pub use modes::{CollisionPolicy, FailurePolicy};
pub use validation::validate_config;
