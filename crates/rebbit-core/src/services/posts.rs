use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Comment, Post, PostUpdate};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

/// Post operations: listing, search, CRUD, comments and votes.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// Every post, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.find_all_newest_first().await?;
        self.attach_comments(posts).await
    }

    /// Posts whose title or content contains `query`, ignoring case.
    /// An empty query matches every post.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<Post>, DomainError> {
        let posts = if query.is_empty() {
            self.posts.find_all().await?
        } else {
            self.posts.search(query).await?
        };
        self.attach_comments(posts).await
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        let post = self.require_post(id).await?;
        self.with_comments(post).await
    }

    /// Persist a new post. Comments in the payload are ignored; they are
    /// only ever created through [`PostService::add_comment`].
    pub async fn create_post(&self, mut post: Post) -> Result<Post, DomainError> {
        post.ensure_id();
        post.comments.clear();

        let saved = self.posts.save(post).await?;
        self.with_comments(saved).await
    }

    /// Overwrite title and content, leaving every other field untouched.
    pub async fn update_post(&self, id: &str, update: PostUpdate) -> Result<Post, DomainError> {
        let mut post = self.require_post(id).await?;
        post.title = update.title;
        post.content = update.content;

        let saved = self.posts.save(post).await?;
        self.with_comments(saved).await
    }

    /// Delete a post and its comments. Missing posts are ignored.
    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        self.comments.delete_by_post_id(id).await?;
        self.posts.delete(id.to_string()).await?;
        Ok(())
    }

    pub async fn add_comment(
        &self,
        post_id: &str,
        mut comment: Comment,
    ) -> Result<Comment, DomainError> {
        self.require_post(post_id).await?;

        comment.ensure_id();
        comment.post_id = post_id.to_string();
        Ok(self.comments.save(comment).await?)
    }

    /// Apply a single upvote (`1`) or downvote (`-1`).
    pub async fn vote(&self, post_id: &str, value: i32) -> Result<Post, DomainError> {
        validate_vote(value)?;

        let post = self
            .posts
            .add_upvotes(post_id, value)
            .await?
            .ok_or_else(|| DomainError::post_not_found(post_id))?;
        self.with_comments(post).await
    }

    async fn require_post(&self, id: &str) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id.to_string())
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    async fn with_comments(&self, mut post: Post) -> Result<Post, DomainError> {
        post.comments = self.comments.find_by_post_ids(&[post.id.clone()]).await?;
        Ok(post)
    }

    async fn attach_comments(&self, mut posts: Vec<Post>) -> Result<Vec<Post>, DomainError> {
        if posts.is_empty() {
            return Ok(posts);
        }

        let ids: Vec<String> = posts.iter().map(|p| p.id.clone()).collect();
        let mut by_post: HashMap<String, Vec<Comment>> = HashMap::new();
        for comment in self.comments.find_by_post_ids(&ids).await? {
            by_post.entry(comment.post_id.clone()).or_default().push(comment);
        }

        for post in &mut posts {
            post.comments = by_post.remove(&post.id).unwrap_or_default();
        }
        Ok(posts)
    }
}

/// Only a single upvote or downvote is accepted per request.
pub fn validate_vote(value: i32) -> Result<(), DomainError> {
    match value {
        1 | -1 => Ok(()),
        other => Err(DomainError::Validation(format!(
            "vote value must be 1 or -1, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_up_and_down_votes() {
        assert!(validate_vote(1).is_ok());
        assert!(validate_vote(-1).is_ok());
    }

    #[test]
    fn rejects_other_vote_values() {
        for value in [0, 2, -2, i32::MAX, i32::MIN] {
            let err = validate_vote(value).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(!err.to_string().contains("not found"));
        }
    }
}
