use async_trait::async_trait;

use crate::domain::{Post, PostFields, PostStatus};
use crate::error::StoreError;

/// Post store port - the shared collection behind the HTTP surface and the
/// publish scheduler.
///
/// Implementations must make each operation atomic with respect to the
/// others: the scheduler's scan must never observe a half-applied create
/// or delete. No operation spans more than one post. Mutations on a
/// missing id are silent no-ops so clients that double-fire a request see
/// idempotent behavior.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Create a post, merging `fields` over the creation defaults.
    async fn create(&self, fields: PostFields) -> Result<Post, StoreError>;

    /// Every post, in insertion order.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Remove the post with this id. No-op if absent.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Record one view on the matching post. No-op if absent.
    async fn increment_views(&self, id: &str) -> Result<(), StoreError>;

    /// Overwrite the status of the matching post. No-op if absent.
    /// Used by the publish scheduler; everything else leaves status alone
    /// after creation.
    async fn set_status(&self, id: &str, status: PostStatus) -> Result<(), StoreError>;
}
