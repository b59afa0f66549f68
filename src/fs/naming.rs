//! Directory and file name generation.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::CollisionPolicy;
use crate::error::{Error, Result};
use crate::media::ImageDescriptor;

lazy_static! {
    static ref NON_ALNUM_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Turn a search query into a folder name.
///
/// The query is lower-cased and every run of characters outside `[a-z0-9]`
/// becomes a single hyphen, so `"Red Sunset!!"` maps to `red-sunset-`.
pub fn query_to_dir_name(query: &str) -> Result<String> {
    let name = NON_ALNUM_RUN
        .replace_all(&query.to_lowercase(), "-")
        .into_owned();

    if name.is_empty() {
        return Err(Error::InvalidDirectory(format!(
            "Query '{}' produces an empty folder name",
            query
        )));
    }

    Ok(name)
}

/// File name chosen for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedName {
    pub filename: String,

    /// URL of the image that owns the plain timestamp name, when this image
    /// shares its second with it.
    pub collides_with: Option<String>,
}

/// Assigns file names to a download queue, detecting images whose timestamps
/// collide at second resolution.
///
/// Within a group of same-second images the one with the lowest
/// [`ImageDescriptor::naming_key`] keeps the plain name and the rest are
/// ranked `_1`, `_2`, ... by the same key. The queue order does not matter,
/// so a re-run that finds a newer same-second image leaves the files of the
/// earlier ones in place.
#[derive(Debug)]
pub struct FilenameAllocator {
    policy: CollisionPolicy,
    /// Base name -> URLs sharing it, in naming order.
    groups: HashMap<String, Vec<String>>,
}

impl FilenameAllocator {
    pub fn new(policy: CollisionPolicy, queue: &[ImageDescriptor]) -> Self {
        let mut keyed: HashMap<String, Vec<&ImageDescriptor>> = HashMap::new();
        for image in queue {
            // Malformed URLs are reported when they are allocated.
            if let Ok(base) = image.generate_filename() {
                keyed.entry(base).or_default().push(image);
            }
        }

        let groups = keyed
            .into_iter()
            .map(|(base, mut images)| {
                images.sort_by(|a, b| a.naming_key().cmp(&b.naming_key()));
                let urls = images.into_iter().map(|i| i.url.clone()).collect();
                (base, urls)
            })
            .collect();

        Self { policy, groups }
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Pick the file name for an image of the queue.
    pub fn allocate(&self, image: &ImageDescriptor) -> Result<AllocatedName> {
        let base = image.generate_filename()?;
        let group = self.groups.get(&base).map(Vec::as_slice).unwrap_or_default();
        let rank = group.iter().position(|url| *url == image.url).unwrap_or(0);

        if rank == 0 {
            return Ok(AllocatedName {
                filename: base,
                collides_with: None,
            });
        }

        let filename = match self.policy {
            CollisionPolicy::Suffix => {
                format!(
                    "{}_{}.{}",
                    image.file_stem(),
                    rank,
                    image.file_extension()?
                )
            }
            CollisionPolicy::Skip => base,
        };

        Ok(AllocatedName {
            filename,
            collides_with: Some(group[0].clone()),
        })
    }
}
