//! Application state - shared across all handlers.

use std::sync::Arc;

use rebbit_core::error::StorageError;
use rebbit_core::ports::{CommentRepository, ImageStore, PostRepository};
use rebbit_core::{ImageService, PostService};
use rebbit_infra::database::DatabaseConfig;
use rebbit_infra::{InMemoryCommentRepository, InMemoryPostRepository, LocalImageStore};

#[cfg(feature = "postgres")]
use rebbit_infra::{PostgresCommentRepository, PostgresPostRepository};

use crate::config::AppConfig;

type Repositories = (Arc<dyn PostRepository>, Arc<dyn CommentRepository>);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub images: ImageService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, StorageError> {
        let (posts, comments) = repositories(config.database.as_ref()).await;
        let images = LocalImageStore::init(&config.upload_dir).await?;

        tracing::info!("Application state initialized");
        Ok(Self::from_parts(posts, comments, Arc::new(images)))
    }

    pub fn from_parts(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        images: Arc<dyn ImageStore>,
    ) -> Self {
        Self {
            posts: PostService::new(posts, comments),
            images: ImageService::new(images),
        }
    }
}

fn in_memory() -> Repositories {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryCommentRepository::new()),
    )
}

#[cfg(feature = "postgres")]
async fn repositories(db_config: Option<&DatabaseConfig>) -> Repositories {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory();
    };

    match rebbit_infra::database::connect(config).await {
        Ok(conn) => (
            Arc::new(PostgresPostRepository::new(conn.clone())),
            Arc::new(PostgresCommentRepository::new(conn)),
        ),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(db_config: Option<&DatabaseConfig>) -> Repositories {
    if db_config.is_some() {
        tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
    }
    tracing::info!("Running without postgres feature - using in-memory repositories");
    in_memory()
}
