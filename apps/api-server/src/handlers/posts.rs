//! Post, comment and vote endpoints.

use actix_web::{HttpResponse, web};
use rebbit_core::domain::{Comment, Post, PostUpdate};
use rebbit_shared::dto::{SearchParams, UpdatePostRequest, VoteParams};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Fetching all posts sorted by creation date");
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/search?query=
pub async fn search_posts(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    tracing::info!(query = %params.query, "Searching posts");
    let posts = state.posts.search_posts(&params.query).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Post>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner();
    tracing::info!(title = ?post.title, "Adding new post");

    let created = state.posts.create_post(post).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let UpdatePostRequest { title, content } = body.into_inner();
    tracing::info!(post_id = %id, "Updating post");

    let updated = state
        .posts
        .update_post(&id, PostUpdate { title, content })
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    tracing::info!(post_id = %path, "Deleting post");
    state.posts.delete_post(&path).await?;
    Ok(HttpResponse::Ok().finish())
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Comment>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    tracing::info!(post_id = %post_id, "Adding comment");

    let comment = state.posts.add_comment(&post_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// PATCH /api/posts/{id}/vote?value=
pub async fn vote_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<VoteParams>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    tracing::info!(post_id = %post_id, value = params.value, "Voting on post");

    let post = state
        .posts
        .vote(&post_id, params.value)
        .await
        .inspect_err(|e| tracing::warn!(post_id = %post_id, error = %e, "Vote rejected"))?;
    Ok(HttpResponse::Ok().json(post))
}
