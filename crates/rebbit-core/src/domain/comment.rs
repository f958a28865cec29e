use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - a text reply attached to exactly one post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: String,
    pub text: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
    /// Owning post. Relational only, never part of the wire format.
    #[serde(skip)]
    pub post_id: String,
}

impl Comment {
    /// Assign a fresh id when the caller did not supply one.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_reference_is_not_serialized() {
        let comment = Comment {
            id: "c1".into(),
            text: Some("Nice post!".into()),
            post_id: "p1".into(),
            ..Default::default()
        };

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["text"], "Nice post!");
        assert!(json.get("postId").is_none());
        assert!(json.get("post_id").is_none());
    }

    #[test]
    fn post_reference_is_not_accepted_from_input() {
        let comment: Comment = serde_json::from_str(r#"{"text":"hi","postId":"p9"}"#).unwrap();
        assert_eq!(comment.post_id, "");
    }
}
