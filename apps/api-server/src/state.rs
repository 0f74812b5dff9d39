//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::database::{DatabaseConfig, DatabaseConnections, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::PostgresBlogPostRepository;

/// Shared application state.
///
/// Handlers only reach storage through `posts`.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (db, posts): (Option<Arc<DatabaseConnections>>, Arc<dyn BlogPostRepository>) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repo = Arc::new(PostgresBlogPostRepository::new(conn.main.clone()));
                        (Some(conn), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryBlogPostRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryBlogPostRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, posts): (Option<Arc<DatabaseConnections>>, Arc<dyn BlogPostRepository>) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            (None, Arc::new(InMemoryBlogPostRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self { posts, db }
    }

    /// State around an already-built repository, with no database handle.
    pub fn with_repository(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts, db: None }
    }
}
