//! In-memory repositories - used when no database is configured.
//!
//! Data is lost on process restart.

use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rebbit_core::domain::{Comment, Post};
use rebbit_core::error::RepoError;
use rebbit_core::ports::{BaseRepository, CommentRepository, PostRepository};

/// Compares present values, descending if asked, with absent values last.
fn cmp_nulls_last(a: &Option<String>, b: &Option<String>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(a),
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Post repository backed by a vector in insertion order.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, String> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        // Comments live in their own repository.
        entity.comments.clear();

        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => posts.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        self.posts.write().await.retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| cmp_nulls_last(&a.created_at, &b.created_at, true));
        Ok(posts)
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let needle = query.to_lowercase();
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| p.matches(&needle)).cloned().collect())
    }

    async fn add_upvotes(&self, id: &str, delta: i32) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.upvotes = post
            .upvotes
            .checked_add(delta)
            .ok_or_else(|| RepoError::Query("upvotes out of range".to_string()))?;
        Ok(Some(post.clone()))
    }
}

/// Comment repository backed by a vector in insertion order.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Comment, String> for InMemoryCommentRepository {
    async fn find_all(&self) -> Result<Vec<Comment>, RepoError> {
        Ok(self.comments.read().await.clone())
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Comment>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
        let mut comments = self.comments.write().await;
        match comments.iter_mut().find(|c| c.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => comments.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        self.comments.write().await.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post_ids(&self, post_ids: &[String]) -> Result<Vec<Comment>, RepoError> {
        let comments = self.comments.read().await;
        let mut found: Vec<Comment> = comments
            .iter()
            .filter(|c| post_ids.contains(&c.post_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| cmp_nulls_last(&a.created_at, &b.created_at, false));
        Ok(found)
    }

    async fn delete_by_post_id(&self, post_id: &str) -> Result<u64, RepoError> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.post_id != post_id);

        let removed = (before - comments.len()) as u64;
        tracing::debug!(post_id, removed, "Deleted comments of post");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, created_at: Option<&str>) -> Post {
        Post {
            id: id.to_string(),
            created_at: created_at.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn newest_first_puts_undated_posts_last() {
        let repo = InMemoryPostRepository::new();
        repo.save(post("old", Some("2024-01-01T00:00:00Z"))).await.unwrap();
        repo.save(post("undated", None)).await.unwrap();
        repo.save(post("new", Some("2025-06-01T00:00:00Z"))).await.unwrap();

        let ids: Vec<String> = repo
            .find_all_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["new", "old", "undated"]);
    }

    #[tokio::test]
    async fn save_overwrites_existing_id_in_place() {
        let repo = InMemoryPostRepository::new();
        repo.save(post("a", None)).await.unwrap();
        repo.save(post("b", None)).await.unwrap();

        let mut updated = post("a", None);
        updated.title = Some("edited".into());
        repo.save(updated).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title.as_deref(), Some("edited"));
    }

    #[tokio::test]
    async fn add_upvotes_on_missing_post_is_none() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.add_upvotes("ghost", 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_upvotes_rejects_overflow() {
        let repo = InMemoryPostRepository::new();
        let mut maxed = post("max", None);
        maxed.upvotes = i32::MAX;
        repo.save(maxed).await.unwrap();

        assert!(repo.add_upvotes("max", 1).await.is_err());
        let stored = repo.find_by_id("max".into()).await.unwrap().unwrap();
        assert_eq!(stored.upvotes, i32::MAX);
    }

    #[tokio::test]
    async fn comments_are_returned_oldest_first() {
        let repo = InMemoryCommentRepository::new();
        for (id, at) in [("c2", "2025-01-02"), ("c1", "2025-01-01"), ("c3", "2025-01-03")] {
            repo.save(Comment {
                id: id.into(),
                post_id: "p".into(),
                created_at: Some(at.into()),
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let ids: Vec<String> = repo
            .find_by_post_ids(&["p".to_string()])
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);
    }

    #[tokio::test]
    async fn delete_by_post_id_only_touches_that_post() {
        let repo = InMemoryCommentRepository::new();
        for (id, post_id) in [("c1", "p1"), ("c2", "p1"), ("c3", "p2")] {
            repo.save(Comment {
                id: id.into(),
                post_id: post_id.into(),
                ..Default::default()
            })
            .await
            .unwrap();
        }

        assert_eq!(repo.delete_by_post_id("p1").await.unwrap(), 2);
        let left = repo.find_all().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "c3");
    }
}
