//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are all optional so that a missing field reaches
//! validation and can be reported by name instead of failing in the
//! JSON extractor.

use serde::{Deserialize, Serialize};

/// Author as submitted by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

/// Request body for `PUT /posts/{id}`.
///
/// `id` is optional; when present it must equal the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplacePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

/// Wire format of a blog post.
///
/// `author` is the display name, never the composite author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: String,
}
