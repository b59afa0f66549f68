//! Photo extraction from search results.

use crate::api::types::{MediaEntity, MediaKind, Post};
use crate::media::item::{ImageDescriptor, LARGE_SUFFIX};

/// Size label that must be present for a photo to be taken.
const LARGE_SIZE: &str = "large";

/// Extract the large-rendition photos attached to a post.
///
/// Every image inherits the post's creation time.
pub fn extract_images(post: &Post) -> Vec<ImageDescriptor> {
    post.entities
        .media
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|media| is_large_photo(media))
        .map(|media| {
            ImageDescriptor::new(format!("{}{}", media.media_url, LARGE_SUFFIX), post.created_at)
                .with_media_id(media.id_str.clone())
        })
        .collect()
}

/// Extract images from a whole page, preserving post order.
pub fn extract_page_images(posts: &[Post]) -> Vec<ImageDescriptor> {
    posts.iter().flat_map(extract_images).collect()
}

fn is_large_photo(media: &MediaEntity) -> bool {
    media.kind == MediaKind::Photo && media.sizes.contains_key(LARGE_SIZE)
}
