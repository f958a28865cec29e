/// Content type every stored image is served with, whatever its real format.
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Public path under which uploaded images are retrievable.
pub const IMAGE_ROUTE_PREFIX: &str = "/api/images/";

/// A stored image ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}
