//! In-memory storage implementation for the book store.
//!
//! Books are kept in a `Vec` in insertion order next to the counter that hands out their
//! ids. Both sit behind one async-aware read-write lock, so every operation observes and
//! mutates them together.

use std::sync::Arc;
use async_trait::async_trait;
use mea::rwlock::RwLock;

use bookstore_core::{
    book::{Book, BookId, NewBook},
    error::StoreResult,
    backend::{StoreBackend, StoreBackendBuilder},
};

/// The catalogue the reference deployment starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: BookId::Sequence(1),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
        },
        Book {
            id: BookId::Sequence(2),
            title: "To Kill a Mockingbird".to_string(),
            author: "Harper Lee".to_string(),
        },
    ]
}

#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    next_id: u64,
}

impl Shelf {
    fn new(books: Vec<Book>) -> Self {
        // Start past every preloaded sequence id so new ids never collide with them.
        let next_id = books
            .iter()
            .filter_map(|book| match book.id {
                BookId::Sequence(n) => Some(n),
                BookId::Object(_) => None,
            })
            .max()
            .map_or(1, |n| n + 1);

        Self { books, next_id }
    }
}

/// Thread-safe in-memory book storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, allowing
/// it to be safely shared across async tasks. Multiple clones of the same instance
/// share the same underlying data.
///
/// # Identifiers
///
/// Ids are decimal integers taken from a counter that only moves forward, so a deleted
/// id is never handed out again and concurrent creates always get distinct ids.
///
/// # Example
///
/// ```ignore
/// use bookstore_memory::InMemoryStore;
/// use bookstore_core::{backend::StoreBackend, book::NewBook};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     let book = store
///         .insert_book(NewBook::new(Some("1984".into()), Some("George Orwell".into()))?)
///         .await?;
///     assert_eq!(store.list_books().await?, vec![book]);
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryStore {
    shelf: Arc<RwLock<Shelf>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty in-memory store. The first book created gets id `1`.
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Creates a store preloaded with `books`, kept in the given order.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            shelf: Arc::new(RwLock::new(Shelf::new(books))),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = InMemoryStore::builder().seeded().build().await.unwrap();
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    /// Number of books currently stored.
    pub async fn len(&self) -> usize {
        self.shelf.read().await.books.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl StoreBackend for InMemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn parse_id(&self, raw: &str) -> Option<BookId> {
        // `u64::from_str` also takes a leading `+`.
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        raw.parse::<u64>().ok().map(BookId::Sequence)
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        Ok(self.shelf.read().await.books.clone())
    }

    async fn insert_book(&self, book: NewBook) -> StoreResult<Book> {
        let mut shelf = self.shelf.write().await;

        let book = Book::from_new(shelf.next_id, book);
        shelf.next_id += 1;
        shelf.books.push(book.clone());

        Ok(book)
    }

    async fn find_book(&self, id: &BookId) -> StoreResult<Option<Book>> {
        Ok(
            self.shelf
                .read()
                .await
                .books
                .iter()
                .find(|book| &book.id == id)
                .cloned()
        )
    }

    async fn delete_book(&self, id: &BookId) -> StoreResult<Option<Book>> {
        let mut shelf = self.shelf.write().await;

        let removed = shelf
            .books
            .iter()
            .find(|book| &book.id == id)
            .cloned();

        // Preloaded data may repeat an id; drop every copy.
        shelf.books.retain(|book| &book.id != id);

        Ok(removed)
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use bookstore_memory::InMemoryStore;
/// use bookstore_core::backend::StoreBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryStore::builder().seeded().build().await.unwrap();
/// }
/// ```
#[derive(Default)]
pub struct InMemoryStoreBuilder {
    books: Vec<Book>,
}

impl InMemoryStoreBuilder {
    /// Preloads the reference catalogue from [`seed_books`].
    pub fn seeded(self) -> Self {
        self.with_books(seed_books())
    }

    /// Preloads the given books after any already queued.
    pub fn with_books(mut self, books: impl IntoIterator<Item = Book>) -> Self {
        self.books.extend(books);
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds.
    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(InMemoryStore::with_books(self.books))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, author: &str) -> NewBook {
        NewBook::new(Some(title.to_string()), Some(author.to_string())).unwrap()
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = InMemoryStore::new();

        let book = store.insert_book(new_book("1984", "George Orwell")).await.unwrap();

        assert_eq!(book.id, BookId::Sequence(1));
        assert_eq!(store.find_book(&book.id).await.unwrap(), Some(book));
    }

    #[tokio::test]
    async fn seeded_store_continues_after_seed() {
        let store = InMemoryStore::builder().seeded().build().await.unwrap();

        assert_eq!(store.list_books().await.unwrap(), seed_books());

        let book = store.insert_book(new_book("Dune", "Frank Herbert")).await.unwrap();
        assert_eq!(book.id, BookId::Sequence(3));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryStore::new();
        for title in ["a", "b", "c"] {
            store.insert_book(new_book(title, "x")).await.unwrap();
        }

        let removed = store.delete_book(&BookId::Sequence(2)).await.unwrap();
        assert_eq!(removed.map(|b| b.title), Some("b".to_string()));

        let book = store.insert_book(new_book("d", "x")).await.unwrap();
        assert_eq!(book.id, BookId::Sequence(4));

        let ids = store
            .list_books()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![BookId::Sequence(1), BookId::Sequence(3), BookId::Sequence(4)]);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = InMemoryStore::new();
        for title in ["c", "a", "b"] {
            store.insert_book(new_book(title, "x")).await.unwrap();
        }

        let titles = store
            .list_books()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn delete_of_missing_id_removes_nothing() {
        let store = InMemoryStore::builder().seeded().build().await.unwrap();

        assert_eq!(store.delete_book(&BookId::Sequence(99)).await.unwrap(), None);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn delete_drops_duplicate_preloaded_ids() {
        let mut books = seed_books();
        books.push(Book {
            id: BookId::Sequence(1),
            title: "Animal Farm".to_string(),
            author: "George Orwell".to_string(),
        });
        let store = InMemoryStore::with_books(books);

        let removed = store.delete_book(&BookId::Sequence(1)).await.unwrap().unwrap();
        assert_eq!(removed.title, "1984");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn parse_id_accepts_only_decimal_integers() {
        let store = InMemoryStore::new();

        assert_eq!(store.parse_id("12"), Some(BookId::Sequence(12)));
        for raw in ["", "abc", "1abc", "-1", "+1", " 1", "1.5", "65f0c1a2b3c4d5e6f7a8b9c0"] {
            assert_eq!(store.parse_id(raw), None, "{raw} should not parse");
        }
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = InMemoryStore::new();

        let handles = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert_book(new_book(&format!("book {i}"), "anon"))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect::<Vec<_>>();

        let mut ids = Vec::new();
        for handle in handles {
            match handle.await.unwrap() {
                BookId::Sequence(n) => ids.push(n),
                other => panic!("unexpected id {other:?}"),
            }
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
        assert_eq!(store.len().await, 32);
    }
}
