//! In-memory book storage backend.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! Records live in insertion order for the lifetime of the process and are lost on restart.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using an async-aware RwLock
//! - **Stable ordering** - Books are listed in the order they were created
//! - **Monotonic ids** - Ids come from a counter and are never reused after a delete
//! - **Seed data** - Optional preloaded catalogue for demos and tests
//!
//! # Quick Start
//!
//! ```ignore
//! use bookstore_core::{backend::{StoreBackend, StoreBackendBuilder}, book::NewBook};
//! use bookstore_memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryStore::builder().seeded().build().await?;
//!
//!     let book = store
//!         .insert_book(NewBook::new(Some("Dune".into()), Some("Frank Herbert".into()))?)
//!         .await?;
//!     assert_eq!(book.id.to_string(), "3");
//!
//!     Ok(())
//! }
//! ```

pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder, seed_books};
