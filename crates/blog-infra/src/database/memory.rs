//! In-memory blog post store - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// In-memory repository backed by a `Vec` behind an async `RwLock`.
///
/// Keeps insertion order, so `find_all` lists oldest first.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn remove_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.retain(|p| p.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created: Utc::now(),
        };

        self.store.write().await.push(post.clone());
        Ok(post)
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Option<BlogPost>, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.title = draft.title;
        post.content = draft.content;
        post.author = draft.author;

        Ok(Some(post.clone()))
    }
}
