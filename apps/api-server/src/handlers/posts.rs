//! Handlers for the `/posts` resource.
//!
//! Every handler validates path and body before touching storage, and
//! answers with the wire format produced by [`to_wire_format`].

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostDraft};
use blog_core::error::DomainError;
use blog_shared::dto::{AuthorInput, CreatePostRequest, PostResponse, ReplacePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Serialized form of a post. The composite author collapses to its
/// display name.
pub fn to_wire_format(post: &BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author_name(),
        created: post.created.to_rfc3339(),
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Malformed id `{}`", raw)))
}

fn author_parts(author: AuthorInput) -> (Option<String>, Option<String>) {
    (author.first_name, author.last_name)
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(to_wire_format).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "BlogPost",
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_wire_format(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft::from_parts(req.title, req.content, req.author.map(author_parts))?;

    let post = state.posts.insert(draft).await?;
    tracing::info!(post_id = %post.id, "Created blog post");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(to_wire_format(&post)))
}

/// PUT /posts/{id}
///
/// Full replacement: every field is required, and a body `id`, when sent,
/// must name the same post as the path.
pub async fn replace_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ReplacePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref()
        && Uuid::parse_str(body_id).ok() != Some(id)
    {
        tracing::warn!(path_id = %id, body_id, "Rejected replace with mismatched ids");
        return Err(AppError::BadRequest(
            "Request path id and body id must match".to_string(),
        ));
    }

    let draft = PostDraft::from_parts(req.title, req.content, req.author.map(author_parts))?;

    let post = state
        .posts
        .replace(id, draft)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "BlogPost",
            id,
        })?;
    tracing::info!(post_id = %id, "Replaced blog post");

    Ok(HttpResponse::Ok().json(to_wire_format(&post)))
}

/// DELETE /posts/{id}
///
/// Idempotent: an unknown id still answers 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.remove_by_id(id).await?;
    tracing::info!(post_id = %id, "Deleted blog post");

    Ok(HttpResponse::NoContent().finish())
}
