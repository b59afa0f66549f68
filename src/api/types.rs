//! API response type definitions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by the search API (`Wed Aug 27 13:08:45 +0000 2008`).
const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Search endpoint response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<Post>,
}

/// A post (tweet) returned by the search API.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub entities: Entities,
}

/// Entities attached to a post. Only media is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub media: Option<Vec<MediaEntity>>,
}

/// Attachment describing an embedded image or video.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaEntity {
    pub id_str: Option<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub media_url: String,
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
}

/// Media type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
    AnimatedGif,
    #[serde(other)]
    Other,
}

/// One size rendition of a media entity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaSize {
    pub w: Option<u32>,
    pub h: Option<u32>,
    pub resize: Option<String>,
}

/// Parse the platform's timestamp format, accepting RFC 3339 as well.
pub fn parse_created_at(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value, TWITTER_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn deserialize_created_at<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_created_at(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid created_at: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_twitter_date() {
        let dt = parse_created_at("Wed Jan 01 00:00:05 +0000 2020").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 5).unwrap());
    }

    #[test]
    fn test_parse_offset_date_converts_to_utc() {
        let dt = parse_created_at("Wed Jan 01 02:00:00 +0200 2020").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_date() {
        let dt = parse_created_at("2020-01-01T00:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert!(parse_created_at("yesterday").is_none());
    }

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "statuses": [
                {
                    "id_str": "1",
                    "created_at": "Wed Jan 01 00:00:00 +0000 2020",
                    "entities": {
                        "media": [
                            {
                                "id_str": "10",
                                "type": "photo",
                                "media_url": "http://pbs.example.com/media/a.jpg",
                                "sizes": {
                                    "large": {"w": 1024, "h": 768, "resize": "fit"},
                                    "thumb": {"w": 150, "h": 150, "resize": "crop"}
                                }
                            },
                            {
                                "type": "multi_photo_thing",
                                "media_url": "http://pbs.example.com/media/b.jpg"
                            }
                        ]
                    }
                },
                {
                    "created_at": "Wed Jan 01 00:00:05 +0000 2020"
                }
            ],
            "search_metadata": {"count": 100, "query": "sunset"}
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.statuses.len(), 2);

        let media = response.statuses[0].entities.media.as_ref().unwrap();
        assert_eq!(media[0].kind, MediaKind::Photo);
        assert_eq!(media[0].id_str.as_deref(), Some("10"));
        assert!(media[0].sizes.contains_key("large"));
        assert_eq!(media[1].kind, MediaKind::Other);
        assert!(media[1].sizes.is_empty());

        assert!(response.statuses[1].entities.media.is_none());
    }

    #[test]
    fn test_deserialize_rejects_bad_timestamp() {
        let json = r#"{"statuses": [{"created_at": "not a date"}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(json).is_err());
    }
}
