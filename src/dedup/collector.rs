//! Image collection: deduplicate by URL, then sort by time.

use std::collections::HashSet;

use crate::media::ImageDescriptor;

/// Deduplicate images by URL and sort them by creation time.
///
/// The first occurrence of a URL wins. The sort is stable, so images sharing a
/// timestamp keep their extraction order.
pub fn collect_unique(images: Vec<ImageDescriptor>) -> Vec<ImageDescriptor> {
    let total = images.len();
    let mut seen = HashSet::new();
    let mut unique: Vec<ImageDescriptor> = images
        .into_iter()
        .filter(|image| seen.insert(image.url.clone()))
        .collect();

    if unique.len() < total {
        tracing::debug!("Dropped {} duplicate image(s)", total - unique.len());
    }

    unique.sort_by_key(|image| image.created_at);
    unique
}
