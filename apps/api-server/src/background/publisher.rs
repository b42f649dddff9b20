//! The publish sweep: one pass over the post store promoting every
//! `Upcoming` post whose scheduled time has arrived.

use chrono::{DateTime, Utc};

use postline_core::domain::PostStatus;
use postline_core::ports::PostStore;

/// Run one sweep at `now`. Returns the number of promoted posts.
///
/// The comparison is inclusive, so a post scheduled for exactly `now`
/// publishes on this sweep. Posts transition independently; a malformed
/// schedule date or a failed mutation on one post never stops the others.
/// Re-running against already-`Published` posts is a no-op.
pub async fn publish_due_posts(store: &dyn PostStore, now: DateTime<Utc>) -> usize {
    let posts = match store.list_all().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("Publish sweep could not read the post store: {}", e);
            return 0;
        }
    };

    let mut published = 0;
    for post in posts {
        let due = match post.due_for_publish(now) {
            Ok(due) => due,
            Err(e) => {
                tracing::warn!(post_id = %post.id, "Skipping post: {}", e);
                continue;
            }
        };
        if !due {
            continue;
        }

        if let Err(e) = store.set_status(&post.id, PostStatus::Published).await {
            tracing::error!(post_id = %post.id, "Failed to publish post: {}", e);
            continue;
        }

        published += 1;
        tracing::info!(post_id = %post.id, "Post auto-published");
    }

    published
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use postline_core::domain::PostFields;
    use postline_infra::InMemoryPostStore;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    fn fields(id: &str, status: Option<PostStatus>, date: Option<&str>) -> PostFields {
        PostFields {
            id: Some(id.to_string()),
            status,
            date: date.map(String::from),
            ..Default::default()
        }
    }

    async fn status_of(store: &InMemoryPostStore, id: &str) -> PostStatus {
        store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
            .status
    }

    #[tokio::test]
    async fn promotes_upcoming_post_once_due() {
        let store = InMemoryPostStore::new();
        store
            .create(fields("1", None, Some("2026-03-01T09:29:59")))
            .await
            .unwrap();

        assert_eq!(publish_due_posts(&store, now()).await, 1);
        assert_eq!(status_of(&store, "1").await, PostStatus::Published);
    }

    #[tokio::test]
    async fn leaves_future_post_upcoming() {
        let store = InMemoryPostStore::new();
        store
            .create(fields("2", None, Some("2026-03-01T10:30")))
            .await
            .unwrap();

        assert_eq!(publish_due_posts(&store, now()).await, 0);
        assert_eq!(status_of(&store, "2").await, PostStatus::Upcoming);
    }

    #[tokio::test]
    async fn ignores_drafts_even_with_a_past_date() {
        let store = InMemoryPostStore::new();
        store
            .create(fields(
                "3",
                Some(PostStatus::Draft),
                Some("2026-03-01T09:00"),
            ))
            .await
            .unwrap();

        assert_eq!(publish_due_posts(&store, now()).await, 0);
        assert_eq!(status_of(&store, "3").await, PostStatus::Draft);
    }

    #[tokio::test]
    async fn ignores_upcoming_post_without_a_date() {
        let store = InMemoryPostStore::new();
        store.create(fields("4", None, None)).await.unwrap();

        assert_eq!(publish_due_posts(&store, now()).await, 0);
        assert_eq!(status_of(&store, "4").await, PostStatus::Upcoming);
    }

    #[tokio::test]
    async fn malformed_date_skips_only_that_post() {
        let store = InMemoryPostStore::new();
        store
            .create(fields("5", None, Some("not-a-date")))
            .await
            .unwrap();
        store
            .create(fields("6", None, Some("2026-03-01T09:29")))
            .await
            .unwrap();

        assert_eq!(publish_due_posts(&store, now()).await, 1);
        assert_eq!(status_of(&store, "5").await, PostStatus::Upcoming);
        assert_eq!(status_of(&store, "6").await, PostStatus::Published);
    }

    #[tokio::test]
    async fn sweep_is_idempotent() {
        let store = InMemoryPostStore::new();
        store
            .create(fields("7", None, Some("2026-03-01T09:00")))
            .await
            .unwrap();

        assert_eq!(publish_due_posts(&store, now()).await, 1);
        assert_eq!(publish_due_posts(&store, now()).await, 0);
        assert_eq!(status_of(&store, "7").await, PostStatus::Published);
    }

    #[tokio::test]
    async fn boundary_is_inclusive() {
        let store = InMemoryPostStore::new();
        store
            .create(fields("8", None, Some("2026-03-01T09:30:00Z")))
            .await
            .unwrap();

        assert_eq!(publish_due_posts(&store, now()).await, 1);
    }

    #[tokio::test]
    async fn post_due_between_sweeps_publishes_on_the_next_one() {
        let store = InMemoryPostStore::new();
        store
            .create(fields("9", None, Some("2026-03-01T09:30:30")))
            .await
            .unwrap();

        // Due 30s after this sweep: untouched now, promoted one period later.
        assert_eq!(publish_due_posts(&store, now()).await, 0);
        let next_tick = now() + chrono::Duration::minutes(1);
        assert_eq!(publish_due_posts(&store, next_tick).await, 1);
        assert_eq!(status_of(&store, "9").await, PostStatus::Published);
    }
}
