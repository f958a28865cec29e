use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Comment;

/// Post entity - a user-authored submission with a vote counter.
///
/// Every field except `id` is optional on input; missing fields take their
/// type defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub upvotes: i32,
    /// Client-supplied creation time, kept as an opaque string.
    pub created_at: Option<String>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Assign a fresh id when the caller did not supply one.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    /// Case-insensitive substring match against title or content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.content]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// The editable part of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}
