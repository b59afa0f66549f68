//! Tweet Image Search - download photos from recent tweets matching a query.
//!
//! # Features
//!
//! - Paged search with a page cap and an approximate image limit
//! - Large-rendition photo extraction from post media entities
//! - URL deduplication and chronological ordering
//! - Idempotent downloads named after the post timestamp
//! - Configurable failure and same-second collision handling
//!
//! # Example
//!
//! ```no_run
//! use tweet_image_search::{run_query, validate_config, Config, TwitterApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::resolve(None)?;
//!     validate_config(&config)?;
//!     let api = TwitterApi::new(&config.api)?;
//!
//!     let report = run_query(&api, &api, &config, "sunset").await?;
//!     println!("{} images", report.images.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{ImageFetcher, SearchApi, TwitterApi};
pub use config::{validate_config, Config, SearchLimits};
pub use download::{download_image, query_for_images, run_query, DownloadState, RunReport};
pub use error::{Error, Result};
pub use media::{extract_images, ImageDescriptor};
