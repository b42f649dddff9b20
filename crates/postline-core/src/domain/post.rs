use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::DomainError;

/// Lifecycle states of a post.
///
/// `Pending` is carried because the product surface filters on it
/// ("pending approval"), but no write path in this service produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft,
    Pending,
    Upcoming,
    Published,
}

/// Post entity - a unit of schedulable content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub status: PostStatus,
    /// Scheduled publish time, kept as the raw string the client supplied.
    /// The value is caller-controlled and may not parse; parsing happens at
    /// evaluation time so one bad value cannot poison a scheduler sweep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    /// Content fields (caption, platform, media reference, ...).
    /// Opaque to the store and the scheduler.
    #[serde(flatten)]
    pub content: serde_json::Map<String, Value>,
}

/// Caller-supplied fields for creating a post. Anything not given falls
/// back to the defaults applied in [`Post::from_fields`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFields {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub content: serde_json::Map<String, Value>,
}

impl Post {
    /// Merge caller fields over the creation defaults: fresh id, zero
    /// views, status `Upcoming`, `created_at` now. Caller values win per
    /// field.
    pub fn from_fields(fields: PostFields) -> Self {
        Self {
            id: fields.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            status: fields.status.unwrap_or(PostStatus::Upcoming),
            date: fields.date,
            views: fields.views.unwrap_or(0),
            created_at: fields.created_at.unwrap_or_else(Utc::now),
            content: fields.content,
        }
    }

    /// Parse the scheduled publish time, if one is set.
    ///
    /// Accepts RFC 3339 and the HTML `datetime-local` shapes
    /// (`2026-03-01T09:30`, with or without seconds); naive values are read
    /// as UTC.
    pub fn scheduled_at(&self) -> Option<Result<DateTime<Utc>, DomainError>> {
        self.date.as_deref().map(parse_schedule_date)
    }

    /// Whether the publish sweep should promote this post at `now`.
    ///
    /// Only `Upcoming` posts with a set date are eligible, and the
    /// comparison is inclusive: a post scheduled for exactly `now`
    /// publishes on the tick that observes it. A malformed date is
    /// surfaced as an error so the caller can log it and move on.
    pub fn due_for_publish(&self, now: DateTime<Utc>) -> Result<bool, DomainError> {
        if self.status != PostStatus::Upcoming {
            return Ok(false);
        }
        match self.scheduled_at() {
            Some(parsed) => Ok(parsed? <= now),
            None => Ok(false),
        }
    }
}

fn parse_schedule_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(DomainError::MalformedScheduleDate {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn upcoming(date: Option<&str>) -> Post {
        Post::from_fields(PostFields {
            date: date.map(String::from),
            ..Default::default()
        })
    }

    #[test]
    fn from_fields_applies_defaults() {
        let post = Post::from_fields(PostFields::default());
        assert_eq!(post.status, PostStatus::Upcoming);
        assert_eq!(post.views, 0);
        assert!(!post.id.is_empty());
        assert!(post.date.is_none());
    }

    #[test]
    fn from_fields_keeps_caller_values() {
        let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut content = serde_json::Map::new();
        content.insert("platform".into(), "instagram".into());

        let post = Post::from_fields(PostFields {
            id: Some("custom-id".into()),
            status: Some(PostStatus::Draft),
            views: Some(7),
            created_at: Some(created),
            content,
            ..Default::default()
        });

        assert_eq!(post.id, "custom-id");
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.views, 7);
        assert_eq!(post.created_at, created);
        assert_eq!(post.content["platform"], "instagram");
    }

    #[test]
    fn scheduled_at_accepts_rfc3339_and_datetime_local() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();

        for raw in [
            "2026-03-01T09:30:00Z",
            "2026-03-01T10:30:00+01:00",
            "2026-03-01T09:30:00",
            "2026-03-01T09:30",
        ] {
            let parsed = upcoming(Some(raw)).scheduled_at().unwrap().unwrap();
            assert_eq!(parsed, expected, "format {raw}");
        }
    }

    #[test]
    fn scheduled_at_rejects_garbage() {
        let parsed = upcoming(Some("not-a-date")).scheduled_at().unwrap();
        assert!(matches!(
            parsed,
            Err(DomainError::MalformedScheduleDate { .. })
        ));
    }

    #[test]
    fn due_when_date_passed_or_exactly_now() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        assert!(upcoming(Some("2026-03-01T09:29")).due_for_publish(now).unwrap());
        assert!(upcoming(Some("2026-03-01T09:30")).due_for_publish(now).unwrap());
        assert!(!upcoming(Some("2026-03-01T09:31")).due_for_publish(now).unwrap());
    }

    #[test]
    fn only_upcoming_posts_with_a_date_are_eligible() {
        let now = Utc::now();

        let mut draft = upcoming(Some("2020-01-01T00:00"));
        draft.status = PostStatus::Draft;
        assert!(!draft.due_for_publish(now).unwrap());

        let mut published = upcoming(Some("2020-01-01T00:00"));
        published.status = PostStatus::Published;
        assert!(!published.due_for_publish(now).unwrap());

        assert!(!upcoming(None).due_for_publish(now).unwrap());
    }

    #[test]
    fn status_serializes_with_product_names() {
        for (status, name) in [
            (PostStatus::Draft, "\"Draft\""),
            (PostStatus::Pending, "\"Pending\""),
            (PostStatus::Upcoming, "\"Upcoming\""),
            (PostStatus::Published, "\"Published\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), name);
        }
    }

    #[test]
    fn post_serializes_flat_with_camel_case_timestamps() {
        let mut content = serde_json::Map::new();
        content.insert("caption".into(), "hello".into());

        let post = Post::from_fields(PostFields {
            id: Some("1".into()),
            content,
            ..Default::default()
        });

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["status"], "Upcoming");
        assert_eq!(json["caption"], "hello");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("date").is_none());
    }
}
