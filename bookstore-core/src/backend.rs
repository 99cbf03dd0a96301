//! Storage backend abstraction for the book store.
//!
//! This module defines the traits that abstract over where book records live, so the
//! HTTP layer can run unchanged on top of an in-process collection or a MongoDB
//! collection.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`DynStoreBackend`]: A trait for dynamic dispatch over backend implementations
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use bookstore_core::{backend::StoreBackend, book::NewBook};
//!
//! let backend = MyBackendImpl::new();
//!
//! let book = backend
//!     .insert_book(NewBook::new(Some("1984".into()), Some("George Orwell".into()))?)
//!     .await?;
//! assert!(backend.find_book(&book.id).await?.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    book::{Book, BookId, NewBook},
    error::StoreResult,
};

/// Abstract interface for book storage backends.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from multiple
/// async tasks. Each operation touches at most one record and must be atomic with respect
/// to the other operations on the same backend.
///
/// # Identifiers
///
/// Every backend owns its identifier format. Callers hand raw path segments to
/// [`StoreBackend::parse_id`]; a segment the backend cannot parse can never name a
/// stored book and is treated as "not found" rather than as a failure.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Short, human readable backend name used in logs and health reports.
    fn name(&self) -> &'static str;

    /// Parses a raw identifier in this backend's format.
    ///
    /// Returns `None` if `raw` is not a well-formed identifier for this backend.
    fn parse_id(&self, raw: &str) -> Option<BookId>;

    /// Returns every stored book.
    ///
    /// The in-memory backend returns insertion order; persistent backends return their
    /// natural order.
    async fn list_books(&self) -> StoreResult<Vec<Book>>;

    /// Stores a new book and returns it with its assigned identifier.
    async fn insert_book(&self, book: NewBook) -> StoreResult<Book>;

    /// Looks up a book by identifier.
    ///
    /// Returns `Ok(None)` if no book has that identifier.
    async fn find_book(&self, id: &BookId) -> StoreResult<Option<Book>>;

    /// Removes a book by identifier.
    ///
    /// Returns the removed book, or `Ok(None)` if nothing was stored under `id`.
    async fn delete_book(&self, id: &BookId) -> StoreResult<Option<Book>>;

    /// Checks that the backend is reachable.
    ///
    /// The default implementation always succeeds; backends with external connections
    /// should override this.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op, but backends with persistent storage or
    /// external connections should override this.
    async fn shutdown(self) -> StoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Object-safe mirror of [`StoreBackend`].
///
/// Implemented for every `StoreBackend + 'static`, which lets the backend be chosen at
/// process startup and stored as `Box<dyn DynStoreBackend>`.
#[async_trait]
pub trait DynStoreBackend: Send + Sync + Debug {
    fn backend_name(&self) -> &'static str;
    fn parse_id(&self, raw: &str) -> Option<BookId>;
    async fn list_books(&self) -> StoreResult<Vec<Book>>;
    async fn insert_book(&self, book: NewBook) -> StoreResult<Book>;
    async fn find_book(&self, id: &BookId) -> StoreResult<Option<Book>>;
    async fn delete_book(&self, id: &BookId) -> StoreResult<Option<Book>>;
    async fn ping(&self) -> StoreResult<()>;
    async fn shutdown_boxed(self: Box<Self>) -> StoreResult<()>;
}

#[async_trait]
impl<B: StoreBackend + 'static> DynStoreBackend for B {
    fn backend_name(&self) -> &'static str {
        StoreBackend::name(self)
    }

    fn parse_id(&self, raw: &str) -> Option<BookId> {
        StoreBackend::parse_id(self, raw)
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        StoreBackend::list_books(self).await
    }

    async fn insert_book(&self, book: NewBook) -> StoreResult<Book> {
        StoreBackend::insert_book(self, book).await
    }

    async fn find_book(&self, id: &BookId) -> StoreResult<Option<Book>> {
        StoreBackend::find_book(self, id).await
    }

    async fn delete_book(&self, id: &BookId) -> StoreResult<Option<Book>> {
        StoreBackend::delete_book(self, id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        StoreBackend::ping(self).await
    }

    async fn shutdown_boxed(self: Box<Self>) -> StoreResult<()> {
        (*self).shutdown().await
    }
}

/// Async factory for backends that need setup (connection strings, seed data).
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> StoreResult<Self::Backend>;
}
