//! Domain entities - the core business objects.

mod comment;
mod image;
mod post;

pub use comment::Comment;
pub use image::{IMAGE_CONTENT_TYPE, IMAGE_ROUTE_PREFIX, Image};
pub use post::{Post, PostUpdate};
