use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{IMAGE_CONTENT_TYPE, IMAGE_ROUTE_PREFIX, Image};
use crate::error::DomainError;
use crate::ports::ImageStore;

/// Image upload and retrieval over an [`ImageStore`].
#[derive(Clone)]
pub struct ImageService {
    store: Arc<dyn ImageStore>,
}

impl ImageService {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Store an upload under a collision-resistant name and return the path
    /// it can be fetched from.
    pub async fn upload(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, DomainError> {
        let file_name = generate_file_name(original_name);
        self.store.put(&file_name, bytes).await?;

        Ok(format!("{IMAGE_ROUTE_PREFIX}{file_name}"))
    }

    /// Fetch a stored image by its exact name.
    ///
    /// Missing and unreadable files are both reported as not found.
    pub async fn retrieve(&self, file_name: &str) -> Result<Image, DomainError> {
        if !is_plain_file_name(file_name) {
            return Err(DomainError::image_not_found(file_name));
        }

        match self.store.get(file_name).await {
            Ok(Some(bytes)) => Ok(Image {
                file_name: file_name.to_string(),
                bytes,
                content_type: IMAGE_CONTENT_TYPE,
            }),
            Ok(None) | Err(_) => Err(DomainError::image_not_found(file_name)),
        }
    }
}

/// `<uuid>_<original>`, keeping only the last path component of the
/// client-supplied name.
fn generate_file_name(original_name: Option<&str>) -> String {
    let base = original_name
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .unwrap_or_default();
    format!("{}_{}", Uuid::new_v4(), base)
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
