//! Core types for the bookstore service.
//!
//! This crate is shared by every storage backend and by the HTTP layer and provides:
//!
//! - **Book model** ([`book`]) - The book record, its identifier, and creation validation
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing different storage backends
//! - **Book store** ([`store`]) - Runtime-selected store used by the request handlers
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use bookstore_core::{book::NewBook, store::BookStore};
//!
//! let store = BookStore::new(backend);
//! let book = store
//!     .create(NewBook::new(Some("1984".into()), Some("George Orwell".into()))?)
//!     .await?;
//! let same = store.get(&book.id.to_string()).await?;
//! ```

pub mod backend;
pub mod book;
pub mod error;
pub mod store;
