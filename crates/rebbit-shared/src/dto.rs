//! Data Transfer Objects - request shapes for the API.

use serde::{Deserialize, Serialize};

/// Body of `PUT /api/posts/{id}`. Absent fields clear the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Query string of `GET /api/posts/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Query string of `PATCH /api/posts/{id}/vote`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoteParams {
    pub value: i32,
}
