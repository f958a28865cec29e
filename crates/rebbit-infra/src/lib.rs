//! # Rebbit Infrastructure
//!
//! Concrete implementations of the ports defined in `rebbit-core`:
//! post and comment repositories and the image store.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - no features - in-memory repositories only

pub mod database;
pub mod storage;

// Re-exports - In-Memory
pub use database::{InMemoryCommentRepository, InMemoryPostRepository};
pub use storage::LocalImageStore;

#[cfg(feature = "postgres")]
pub use database::{PostgresCommentRepository, PostgresPostRepository};
