//! Main book store interface used by the request handlers.
//!
//! [`BookStore`] holds a backend chosen at runtime and turns its `Option`-based lookups
//! into the uniform error contract the HTTP layer relies on: an identifier that does not
//! parse, or that names nothing, is [`StoreError::BookNotFound`] on every backend.
//!
//! # Example
//!
//! ```ignore
//! use bookstore_core::store::BookStore;
//!
//! let store = BookStore::new(backend);
//! let books = store.list().await?;
//! ```

use crate::{
    backend::{DynStoreBackend, StoreBackend},
    book::{Book, NewBook},
    error::{StoreError, StoreResult},
};

/// A book store backed by a dynamically dispatched storage backend.
#[derive(Debug)]
pub struct BookStore {
    backend: Box<dyn DynStoreBackend>,
}

impl BookStore {
    /// Creates a new book store with the given backend.
    pub fn new<B: StoreBackend + 'static>(backend: B) -> Self {
        Self::from_boxed(Box::new(backend))
    }

    /// Creates a new book store from an already boxed backend.
    pub fn from_boxed(backend: Box<dyn DynStoreBackend>) -> Self {
        Self { backend }
    }

    /// Name of the backend serving this store.
    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// Returns every stored book.
    pub async fn list(&self) -> StoreResult<Vec<Book>> {
        self.backend.list_books().await
    }

    /// Stores a validated book and returns it with its assigned identifier.
    pub async fn create(&self, book: NewBook) -> StoreResult<Book> {
        self.backend.insert_book(book).await
    }

    /// Fetches a book by its raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BookNotFound`] if `raw_id` is malformed for the backend or
    /// names no stored book, and passes backend failures through unchanged.
    pub async fn get(&self, raw_id: &str) -> StoreResult<Book> {
        let Some(id) = self.backend.parse_id(raw_id) else {
            return Err(StoreError::BookNotFound(raw_id.to_string()));
        };

        self.backend
            .find_book(&id)
            .await?
            .ok_or_else(|| StoreError::BookNotFound(raw_id.to_string()))
    }

    /// Deletes a book by its raw identifier and returns the removed record.
    ///
    /// # Errors
    ///
    /// Same contract as [`BookStore::get`]: nothing removed means
    /// [`StoreError::BookNotFound`].
    pub async fn delete(&self, raw_id: &str) -> StoreResult<Book> {
        let Some(id) = self.backend.parse_id(raw_id) else {
            return Err(StoreError::BookNotFound(raw_id.to_string()));
        };

        self.backend
            .delete_book(&id)
            .await?
            .ok_or_else(|| StoreError::BookNotFound(raw_id.to_string()))
    }

    /// Checks that the backend is reachable.
    pub async fn ping(&self) -> StoreResult<()> {
        self.backend.ping().await
    }

    /// Shuts down the store and releases backend resources.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.backend.shutdown_boxed().await
    }
}
