//! In-memory stand-ins for the search API and image fetcher.

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::StreamExt;

use crate::api::types::{Entities, MediaEntity, MediaKind, MediaSize, Post};
use crate::api::{ImageBody, ImageFetcher, SearchApi};
use crate::error::{Error, Result};

/// Serves canned pages; pages past the end are empty.
pub struct FakeSearch {
    pages: Vec<Vec<Post>>,
    fail_on: Option<u32>,
    requests: Mutex<Vec<u32>>,
}

impl FakeSearch {
    pub fn new(pages: Vec<Vec<Post>>) -> Self {
        Self {
            pages,
            fail_on: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `pages`, but answer the request for `page` with an error.
    pub fn failing_on(pages: Vec<Vec<Post>>, page: u32) -> Self {
        Self {
            fail_on: Some(page),
            ..Self::new(pages)
        }
    }

    /// Page numbers requested so far.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchApi for FakeSearch {
    async fn search(&self, _query: &str, page: u32, _page_size: u32) -> Result<Vec<Post>> {
        self.requests.lock().unwrap().push(page);

        if self.fail_on == Some(page) {
            return Err(Error::Search {
                page,
                message: "HTTP 503 Service Unavailable".to_string(),
            });
        }

        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }
}

/// Returns the same body for every URL, except those configured to fail.
pub struct FakeFetcher {
    body: Vec<u8>,
    failing: Vec<String>,
    cut_stream: bool,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            failing: Vec::new(),
            cut_stream: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_for(urls: &[&str]) -> Self {
        Self {
            failing: urls.iter().map(|u| u.to_string()).collect(),
            ..Self::new(b"image".to_vec())
        }
    }

    /// Every response yields the first half of `body`, then a stream error.
    pub fn cut_off(body: Vec<u8>) -> Self {
        Self {
            cut_stream: true,
            ..Self::new(body)
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageFetcher for FakeFetcher {
    async fn fetch_image(&self, url: &str) -> Result<ImageBody> {
        self.requests.lock().unwrap().push(url.to_string());

        if self.failing.iter().any(|u| u == url) {
            return Err(Error::Download(format!("Failed to download {}: HTTP 404", url)));
        }

        // Split the body in two chunks to exercise streaming writes.
        let mid = self.body.len() / 2;
        let tail = if self.cut_stream {
            Err(Error::Download(format!("Connection reset while reading {}", url)))
        } else {
            Ok(Bytes::copy_from_slice(&self.body[mid..]))
        };
        let chunks: Vec<Result<Bytes>> = vec![Ok(Bytes::copy_from_slice(&self.body[..mid])), tail];

        Ok(ImageBody {
            content_length: Some(self.body.len() as u64),
            stream: futures::stream::iter(chunks).boxed(),
        })
    }
}

/// A post with one large photo per URL.
pub fn photo_post(created_at: DateTime<Utc>, urls: &[&str]) -> Post {
    let media = urls.iter().map(|url| large_photo(None, url)).collect();

    Post {
        created_at,
        entities: Entities { media: Some(media) },
    }
}

/// A post with a single large photo carrying a media id.
pub fn photo_post_with_id(created_at: DateTime<Utc>, media_id: &str, url: &str) -> Post {
    Post {
        created_at,
        entities: Entities {
            media: Some(vec![large_photo(Some(media_id), url)]),
        },
    }
}

fn large_photo(media_id: Option<&str>, url: &str) -> MediaEntity {
    MediaEntity {
        id_str: media_id.map(str::to_string),
        kind: MediaKind::Photo,
        media_url: url.to_string(),
        sizes: [("large".to_string(), MediaSize::default())]
            .into_iter()
            .collect(),
    }
}

/// A post without attachments.
pub fn text_post(created_at: DateTime<Utc>) -> Post {
    Post {
        created_at,
        entities: Entities::default(),
    }
}
