//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let active = blog_post::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            content: Set(draft.content),
            author_first_name: Set(draft.author.first_name),
            author_last_name: Set(draft.author.last_name),
            created: Set(Utc::now().into()),
        };

        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = %model.id, "Inserted blog post");

        Ok(model.into())
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Option<BlogPost>, RepoError> {
        let Some(existing) = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.title = Set(draft.title);
        active.content = Set(draft.content);
        active.author_first_name = Set(draft.author.first_name);
        active.author_last_name = Set(draft.author.last_name);

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            // Removed between the lookup and the update.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_db_err(e)),
        }
    }
}
