use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Display name: first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - a persisted blog post.
///
/// `id` and `created` are assigned by storage on insert and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    pub fn author_name(&self) -> String {
        self.author.full_name()
    }
}

/// The client-writable fields of a post, already validated.
///
/// Used for both creation and full replacement; there is no partial form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl PostDraft {
    /// Build a draft from possibly-missing request fields.
    ///
    /// Fields are checked in wire order and the first failure is reported
    /// using its wire name (`title`, `content`, `author`, `author.firstName`,
    /// `author.lastName`).
    pub fn from_parts(
        title: Option<String>,
        content: Option<String>,
        author: Option<(Option<String>, Option<String>)>,
    ) -> Result<Self, DomainError> {
        let title = required("title", title)?;
        let content = required("content", content)?;
        let (first_name, last_name) = author.ok_or_else(|| missing("author"))?;
        let first_name = required("author.firstName", first_name)?;
        let last_name = required("author.lastName", last_name)?;

        Ok(Self {
            title,
            content,
            author: Author {
                first_name,
                last_name,
            },
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    let value = value.ok_or_else(|| missing(field))?;
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "`{field}` must not be empty"
        )));
    }
    Ok(value)
}

fn missing(field: &str) -> DomainError {
    DomainError::Validation(format!("Missing `{field}` in request body"))
}
