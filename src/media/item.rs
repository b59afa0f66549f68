//! Image descriptor representation.

use chrono::{DateTime, Local, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

/// URL suffix that selects the large rendition of a photo.
pub const LARGE_SUFFIX: &str = ":large";

lazy_static! {
    /// `<anything>.<3 chars>:large`, capturing the extension.
    static ref LARGE_URL_EXTENSION: Regex = Regex::new(r"^.*\.(.{3}):large$").unwrap();
}

/// A downloadable photo found in a post.
///
/// Two descriptors refer to the same image iff their URLs are equal; the
/// timestamp is carried along but is not part of the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Large-rendition URL (`<media_url>:large`).
    pub url: String,

    /// Creation time of the post the image was attached to.
    pub created_at: DateTime<Utc>,

    /// Platform id of the media entity, when the API reported one.
    pub media_id: Option<String>,
}

impl ImageDescriptor {
    pub fn new(url: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            created_at,
            media_id: None,
        }
    }

    pub fn with_media_id(mut self, media_id: Option<String>) -> Self {
        self.media_id = media_id;
        self
    }

    /// Order among images that share a timestamp: media id (ids grow over
    /// time), then URL. Independent of the order the search returned them in.
    pub fn naming_key(&self) -> (Option<u64>, &str) {
        (
            self.media_id.as_deref().and_then(|id| id.parse().ok()),
            &self.url,
        )
    }

    /// File extension parsed from the `.<ext>:large` tail of the URL.
    pub fn file_extension(&self) -> Result<&str> {
        LARGE_URL_EXTENSION
            .captures(&self.url)
            .and_then(|captures| captures.get(1))
            .map(|ext| ext.as_str())
            .ok_or_else(|| Error::Extraction(self.url.clone()))
    }

    /// UTC creation time formatted for file names (`YYYYMMDDHHMMSS`).
    pub fn file_stem(&self) -> String {
        self.created_at.format("%Y%m%d%H%M%S").to_string()
    }

    /// Default file name: `<YYYYMMDDHHMMSS>.<ext>`.
    pub fn generate_filename(&self) -> Result<String> {
        Ok(format!("{}.{}", self.file_stem(), self.file_extension()?))
    }

    /// Creation time in the local timezone, as shown in the summary.
    pub fn local_timestamp(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
