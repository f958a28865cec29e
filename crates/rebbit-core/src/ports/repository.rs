use async_trait::async_trait;

use crate::domain::{Comment, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Load every entity, in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting a missing ID is not an error.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Posts come back without their comments; the service attaches them.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, String> {
    /// All posts, newest `created_at` first, posts without one last.
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts whose title or content contains `query`, ignoring case.
    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError>;

    /// Add `delta` to the post's upvotes in one storage operation.
    /// Returns `None` when no post has this id.
    async fn add_upvotes(&self, id: &str, delta: i32) -> Result<Option<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, String> {
    /// Comments belonging to any of `post_ids`, oldest `created_at` first.
    async fn find_by_post_ids(&self, post_ids: &[String]) -> Result<Vec<Comment>, RepoError>;

    /// Remove every comment of a post, returning how many were removed.
    async fn delete_by_post_id(&self, post_id: &str) -> Result<u64, RepoError>;
}
