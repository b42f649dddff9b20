//! In-memory post store - the process-owned collection shared between the
//! HTTP layer and the publish scheduler.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postline_core::domain::{Post, PostFields, PostStatus};
use postline_core::error::StoreError;
use postline_core::ports::PostStore;

/// In-memory post store: a `Vec` behind an async `RwLock`.
///
/// Each operation takes the lock exactly once, so a concurrent scheduler
/// scan sees either all or none of a mutation. Insertion order is
/// preserved. Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, fields: PostFields) -> Result<Post, StoreError> {
        let post = Post::from_fields(fields);
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, "Post created. Store size: {}", posts.len());
        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.retain(|p| p.id != id);
        Ok(())
    }

    async fn increment_views(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
            post.views += 1;
        }
        Ok(())
    }

    async fn set_status(&self, id: &str, status: PostStatus) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
            post.status = status;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_id(id: &str) -> PostFields {
        PostFields {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_applies_defaults_and_preserves_order() {
        let store = InMemoryPostStore::new();
        let first = store.create(with_id("a")).await.unwrap();
        store.create(with_id("b")).await.unwrap();

        assert_eq!(first.status, PostStatus::Upcoming);
        assert_eq!(first.views, 0);

        let ids: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn delete_removes_post_and_is_idempotent() {
        let store = InMemoryPostStore::new();
        store.create(with_id("a")).await.unwrap();

        store.delete_by_id("a").await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());

        // Second delete of the same id is a silent no-op.
        store.delete_by_id("a").await.unwrap();
    }

    #[tokio::test]
    async fn increment_views_counts_only_the_matching_post() {
        let store = InMemoryPostStore::new();
        store.create(with_id("a")).await.unwrap();
        store.create(with_id("b")).await.unwrap();

        store.increment_views("a").await.unwrap();
        store.increment_views("a").await.unwrap();

        let posts = store.list_all().await.unwrap();
        assert_eq!(posts[0].views, 2);
        assert_eq!(posts[1].views, 0);
    }

    #[tokio::test]
    async fn mutations_on_a_deleted_post_are_noops() {
        let store = InMemoryPostStore::new();
        store.create(with_id("a")).await.unwrap();
        store.delete_by_id("a").await.unwrap();

        store.increment_views("a").await.unwrap();
        store
            .set_status("a", PostStatus::Published)
            .await
            .unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_status_touches_only_the_status_field() {
        let store = InMemoryPostStore::new();
        let created = store
            .create(PostFields {
                id: Some("a".into()),
                date: Some("2026-03-01T09:30".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        store
            .set_status("a", PostStatus::Published)
            .await
            .unwrap();

        let post = &store.list_all().await.unwrap()[0];
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.date, created.date);
        assert_eq!(post.views, created.views);
        assert_eq!(post.created_at, created.created_at);
    }
}
