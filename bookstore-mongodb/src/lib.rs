//! MongoDB backend implementation for the book store.
//!
//! This crate provides a MongoDB-based implementation of the `StoreBackend` trait,
//! enabling durable book storage that survives process restarts.
//!
//! To use this backend from the service crate, keep the `mongodb` feature enabled:
//!
//! ```toml
//! [dependencies]
//! bookstore = { version = "x.y.z", features = ["mongodb"] }
//! ```
//!
//! # Storage layout
//!
//! Each book is one document `{ _id: ObjectId, title, author }` in a single collection
//! (`books` by default). The `ObjectId` is the identifier clients see, rendered as a
//! 24-character hex string.
//!
//! # Connection
//!
//! The client connects lazily. Building the store never fails because the server is down;
//! use [`StoreBackend::ping`](bookstore_core::backend::StoreBackend::ping) to probe it.
//!
//! # Example
//!
//! ```ignore
//! use bookstore_core::backend::StoreBackendBuilder;
//! use bookstore_mongodb::MongoDbStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbStore::builder("mongodb://127.0.0.1:27017", "bookstore")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
