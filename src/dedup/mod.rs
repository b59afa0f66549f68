//! Deduplication module.
//!
//! Provides:
//! - URL-keyed deduplication of extracted images
//! - Chronological ordering of the download queue

pub mod collector;

pub use collector::collect_unique;
