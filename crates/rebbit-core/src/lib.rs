//! # Rebbit Core
//!
//! The domain layer of the Rebbit discussion board.
//! Posts, comments and images, the ports infrastructure must implement,
//! and the services that orchestrate them. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{ImageService, PostService};
