//! HTTP handlers and route configuration.

/// Builds a test service with the same routes and extractor settings as
/// the server.
#[cfg(test)]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure(crate::handlers::configure_extractors(1024 * 1024))
                .configure(crate::handlers::configure_routes),
        )
    };
}

mod health;
mod images;
mod posts;

use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // `/search` must be registered before `/{id}`
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/search", web::get().to(posts::search_posts))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post))
                    .route("/{id}/comments", web::post().to(posts::add_comment))
                    .route("/{id}/vote", web::patch().to(posts::vote_post)),
            )
            .service(
                web::scope("/images")
                    .route("/upload", web::post().to(images::upload_image))
                    .route("/{file_name}", web::get().to(images::get_image)),
            ),
    );
}

/// Extractor settings: malformed bodies, queries and uploads answer 400
/// with a problem body, and uploads are capped at `max_upload_bytes`.
pub fn configure_extractors(max_upload_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(
            web::JsonConfig::default()
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::PathConfig::default()
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            MultipartFormConfig::default()
                .total_limit(max_upload_bytes)
                .memory_limit(max_upload_bytes)
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        );
    }
}
