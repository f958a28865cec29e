//! Image upload and retrieval endpoints.

use actix_multipart::form::{MultipartForm, bytes::Bytes};
use actix_web::{HttpResponse, http::header::ContentType, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Multipart body of an upload; the image travels in the `file` part.
#[derive(MultipartForm)]
pub struct UploadForm {
    file: Bytes,
}

/// POST /api/images/upload
///
/// Responds with the path the image can be fetched from, as plain text.
pub async fn upload_image(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> AppResult<HttpResponse> {
    let original_name = form.file.file_name.as_deref();
    tracing::info!(file_name = ?original_name, size = form.file.data.len(), "Uploading image");

    let path = state.images.upload(original_name, &form.file.data).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(path))
}

/// GET /api/images/{file_name}
pub async fn get_image(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let image = state.images.retrieve(&path).await?;
    Ok(HttpResponse::Ok()
        .content_type(image.content_type)
        .body(image.bytes))
}
