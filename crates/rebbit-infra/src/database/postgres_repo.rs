//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, NullOrdering};
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder};

use rebbit_core::domain::{Comment, Post};
use rebbit_core::error::RepoError;
use rebbit_core::ports::{CommentRepository, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// `%query%` with LIKE wildcards in the query matched literally.
fn contains_pattern(query: &str) -> LikeExpr {
    let escaped = query
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_with_nulls(post::Column::CreatedAt, Order::Desc, NullOrdering::Last)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(query, "Searching posts");

        let pattern = contains_pattern(query);
        let title = Expr::expr(Func::lower(Expr::col(post::Column::Title)));
        let content = Expr::expr(Func::lower(Expr::col(post::Column::Content)));

        let result = PostEntity::find()
            .filter(
                Condition::any()
                    .add(title.like(pattern.clone()))
                    .add(content.like(pattern)),
            )
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn add_upvotes(&self, id: &str, delta: i32) -> Result<Option<Post>, RepoError> {
        let updated = PostEntity::update_many()
            .col_expr(
                post::Column::Upvotes,
                Expr::col(post::Column::Upvotes).add(delta),
            )
            .filter(post::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(updated.into_iter().next().map(Into::into))
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post_ids(&self, post_ids: &[String]) -> Result<Vec<Comment>, RepoError> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = CommentEntity::find()
            .filter(comment::Column::PostId.is_in(post_ids.iter().cloned()))
            .order_by_with_nulls(comment::Column::CreatedAt, Order::Asc, NullOrdering::Last)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_by_post_id(&self, post_id: &str) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(post_id))
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id, removed = result.rows_affected, "Deleted comments of post");
        Ok(result.rows_affected)
    }
}

