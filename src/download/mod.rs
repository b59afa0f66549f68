//! Download module for searching and saving images.
//!
//! This module provides:
//! - Paged image search
//! - Image file downloading
//! - Download state tracking
//! - The full search-then-download run

pub mod image;
pub mod pipeline;
pub mod search;
pub mod state;

#[cfg(test)]
pub(crate) mod fakes;

pub use image::{download_image, download_image_to, DownloadOutcome};
pub use pipeline::{download_all, run_query, RunReport};
pub use search::query_for_images;
pub use state::{DownloadState, FailedDownload};
