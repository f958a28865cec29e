//! Application services - the operations the HTTP layer exposes.

mod images;
mod posts;

pub use images::ImageService;
pub use posts::{PostService, validate_vote};
