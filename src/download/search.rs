//! Paged search for images.

use crate::api::SearchApi;
use crate::config::SearchLimits;
use crate::dedup::collect_unique;
use crate::error::Result;
use crate::media::{extract_page_images, ImageDescriptor};
use crate::output::print_info;

/// Query recent posts for images.
///
/// Pages are requested from 1 upwards. Paging stops when a page comes back
/// empty, when the page cap is reached, or once more than `max_images`
/// images have been collected (the current page is always kept whole).
/// The result is deduplicated by URL and sorted by creation time.
pub async fn query_for_images<A>(
    api: &A,
    query: &str,
    limits: &SearchLimits,
) -> Result<Vec<ImageDescriptor>>
where
    A: SearchApi + ?Sized,
{
    let mut all_images = Vec::new();
    let mut page = 1;

    loop {
        print_info(&format!(
            "Querying for {} tweets matching '{}'...",
            limits.page_size, query
        ));

        let posts = api.search(query, page, limits.page_size).await?;
        let images = extract_page_images(&posts);
        print_info(&format!("  Got {} images.", images.len()));
        all_images.extend(images);

        if posts.is_empty() {
            tracing::debug!("Page {} is empty, no more results", page);
            break;
        }

        page += 1;
        if page > limits.max_pages {
            tracing::debug!("Reached page limit ({})", limits.max_pages);
            break;
        }

        if all_images.len() > limits.max_images {
            tracing::debug!(
                "Collected {} images (limit {}), stopping",
                all_images.len(),
                limits.max_images
            );
            break;
        }
    }

    Ok(collect_unique(all_images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::fakes::{photo_post, text_post, FakeSearch};
    use crate::error::Error;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    /// A page with `count` single-photo posts, URLs unique per page.
    fn photo_page(page: u32, count: usize) -> Vec<crate::api::Post> {
        (0..count)
            .map(|i| {
                let url = format!("http://x/p{}_{}.jpg", page, i);
                photo_post(at(page as i64 * 1000 + i as i64), &[url.as_str()])
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_first_page_makes_one_request() {
        let api = FakeSearch::new(Vec::new());
        let images = query_for_images(&api, "sunset", &SearchLimits::default())
            .await
            .unwrap();

        assert!(images.is_empty());
        assert_eq!(api.requested_pages(), vec![1]);
    }

    #[tokio::test]
    async fn test_page_cap() {
        let pages: Vec<_> = (0..16).map(|i| vec![text_post(at(i))]).collect();
        let api = FakeSearch::new(pages);

        query_for_images(&api, "sunset", &SearchLimits::default())
            .await
            .unwrap();

        assert_eq!(api.requested_pages(), (1..=15).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn test_image_limit_stops_after_current_page() {
        let pages: Vec<_> = (1..=5).map(|p| photo_page(p, 30)).collect();
        let api = FakeSearch::new(pages);

        let images = query_for_images(&api, "sunset", &SearchLimits::default())
            .await
            .unwrap();

        assert_eq!(api.requested_pages(), vec![1, 2]);
        assert_eq!(images.len(), 60);
    }

    #[tokio::test]
    async fn test_exactly_max_images_keeps_paging() {
        let pages = vec![photo_page(1, 25), photo_page(2, 25), photo_page(3, 1)];
        let api = FakeSearch::new(pages);

        let images = query_for_images(&api, "sunset", &SearchLimits::default())
            .await
            .unwrap();

        assert_eq!(api.requested_pages(), vec![1, 2, 3]);
        assert_eq!(images.len(), 51);
    }

    #[tokio::test]
    async fn test_custom_limits() {
        let pages: Vec<_> = (0..10).map(|i| vec![text_post(at(i))]).collect();
        let api = FakeSearch::new(pages);
        let limits = SearchLimits {
            max_pages: 3,
            ..SearchLimits::default()
        };

        query_for_images(&api, "sunset", &limits).await.unwrap();
        assert_eq!(api.requested_pages(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_results_deduplicated_and_sorted() {
        let pages = vec![
            vec![
                photo_post(at(30), &["http://x/c.jpg"]),
                photo_post(at(10), &["http://x/a.jpg"]),
            ],
            vec![
                photo_post(at(10), &["http://x/a.jpg"]),
                photo_post(at(20), &["http://x/b.jpg"]),
            ],
        ];
        let api = FakeSearch::new(pages);

        let images = query_for_images(&api, "sunset", &SearchLimits::default())
            .await
            .unwrap();

        let urls: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "http://x/a.jpg:large",
                "http://x/b.jpg:large",
                "http://x/c.jpg:large"
            ]
        );
        assert_eq!(api.requested_pages(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_search_failure_stops_paging() {
        let api = FakeSearch::failing_on(vec![photo_page(1, 2), photo_page(2, 2), photo_page(3, 2)], 2);

        let err = query_for_images(&api, "sunset", &SearchLimits::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Search { page: 2, .. }));
        assert_eq!(api.requested_pages(), vec![1, 2]);
    }
}
