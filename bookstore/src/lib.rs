//! Bookstore inventory HTTP API.
//!
//! This crate is the entry point of the service. It wires the storage backends from the
//! sibling crates to an axum router exposing four book operations:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `GET` | `/books` | 200, every book |
//! | `POST` | `/books` | 201, the created book |
//! | `GET` | `/books/:id` | 200, one book |
//! | `DELETE` | `/books/:id` | 200, confirmation message |
//!
//! Every failure is a JSON object with a single `message` field.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use bookstore::{app, memory::InMemoryStore, store::BookStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(BookStore::new(InMemoryStore::new()));
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
//!
//!     axum::serve(listener, app::build_app(store)).await.unwrap();
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Volatile in-process storage, seeded with two books by default
//! - [`mongodb`] - Persistent MongoDB storage (requires the `mongodb` feature)

pub mod app;
pub mod config;
pub mod errors;
pub mod payload;
pub mod routes;
pub mod telemetry;

pub use bookstore_core::{backend, book, error, store};

/// In-memory storage backend implementations.
pub mod memory {
    pub use bookstore_memory::{InMemoryStore, InMemoryStoreBuilder, seed_books};
}

/// MongoDB storage backend implementations.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use bookstore_mongodb::{MongoDbStore, MongoDbStoreBuilder};
}
