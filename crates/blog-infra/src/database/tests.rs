use blog_core::domain::{Author, BlogPost, PostDraft};
use blog_core::ports::{BaseRepository, BlogPostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::blog_post;
use crate::database::postgres_repo::PostgresBlogPostRepository;

fn model(id: uuid::Uuid, title: &str) -> blog_post::Model {
    blog_post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        author_first_name: "Grace".to_owned(),
        author_last_name: "Hopper".to_owned(),
        created: chrono::Utc::now().into(),
    }
}

fn draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_owned(),
        content: "Content".to_owned(),
        author: Author {
            first_name: "Grace".to_owned(),
            last_name: "Hopper".to_owned(),
        },
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = uuid::Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, "Test Post")]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.author_name(), "Grace Hopper");
}

#[tokio::test]
async fn test_find_post_by_id_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            model(uuid::Uuid::new_v4(), "one"),
            model(uuid::Uuid::new_v4(), "two"),
        ]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let posts: Vec<BlogPost> = repo.find_all().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].title, "two");
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let post_id = uuid::Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, "Fresh")]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let post = repo.insert(draft("Fresh")).await.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Fresh");
}

#[tokio::test]
async fn test_replace_unknown_id_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let result = repo
        .replace(uuid::Uuid::new_v4(), draft("Nope"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_remove_missing_row_is_ok() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let result =
        BaseRepository::<BlogPost, uuid::Uuid>::remove_by_id(&repo, uuid::Uuid::new_v4()).await;
    assert!(result.is_ok());
}
