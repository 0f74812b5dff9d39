use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostDraft};
use crate::error::RepoError;

/// Generic repository trait for the read and remove half of CRUD.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Return every stored entity, in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID. Removing an absent ID is not an error.
    async fn remove_by_id(&self, id: ID) -> Result<(), RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// Persist a new post. Storage assigns `id` and `created`.
    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError>;

    /// Overwrite title, content and author of an existing post.
    ///
    /// Returns `None` when no post has this id. `id` and `created` are kept.
    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Option<BlogPost>, RepoError>;
}
