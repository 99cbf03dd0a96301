//! The book record and its identifier.
//!
//! A [`Book`] is the only resource the service manages. Its identifier depends on the
//! backend that stored it: the in-memory store hands out small sequential integers,
//! while MongoDB assigns an `ObjectId`. [`BookId`] covers both and serializes to the
//! JSON shape clients see (`1` or `"65f0c1..."`).

use bson::oid::ObjectId;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{StoreError, StoreResult};

/// Message returned when a creation request lacks a title or an author.
pub const MISSING_FIELDS_MESSAGE: &str = "Title and author are required";

/// Identifier of a stored book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookId {
    /// Process-local sequence number assigned by the in-memory store.
    Sequence(u64),
    /// Identifier assigned by MongoDB on insertion.
    Object(ObjectId),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Sequence(n) => write!(f, "{n}"),
            BookId::Object(oid) => write!(f, "{}", oid.to_hex()),
        }
    }
}

impl From<u64> for BookId {
    fn from(n: u64) -> Self {
        BookId::Sequence(n)
    }
}

impl From<ObjectId> for BookId {
    fn from(oid: ObjectId) -> Self {
        BookId::Object(oid)
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BookId::Sequence(n) => serializer.serialize_u64(*n),
            BookId::Object(oid) => serializer.serialize_str(&oid.to_hex()),
        }
    }
}

/// A stored book, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Default collection (or table) name used by persistent backends.
    pub const COLLECTION: &'static str = "books";

    /// Attaches an identifier to a validated creation request.
    pub fn from_new(id: impl Into<BookId>, book: NewBook) -> Self {
        Self {
            id: id.into(),
            title: book.title,
            author: book.author,
        }
    }
}

/// A validated request to create a book.
///
/// Both fields are guaranteed to be non-empty. Values are stored exactly as given;
/// no trimming or normalization happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    title: String,
    author: String,
}

impl NewBook {
    /// Checks that both fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDocument`] with [`MISSING_FIELDS_MESSAGE`] when
    /// either field is absent or empty.
    pub fn new(title: Option<String>, author: Option<String>) -> StoreResult<Self> {
        match (title, author) {
            (Some(title), Some(author)) if !title.is_empty() && !author.is_empty() => {
                Ok(Self { title, author })
            }
            _ => Err(StoreError::InvalidDocument(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_book_requires_both_fields() {
        assert!(NewBook::new(Some("1984".into()), Some("George Orwell".into())).is_ok());

        for (title, author) in [
            (None, Some("George Orwell".to_string())),
            (Some("1984".to_string()), None),
            (Some(String::new()), Some("George Orwell".to_string())),
            (Some("1984".to_string()), Some(String::new())),
            (None, None),
        ] {
            let err = NewBook::new(title, author).unwrap_err();
            assert!(
                matches!(&err, StoreError::InvalidDocument(msg) if msg == MISSING_FIELDS_MESSAGE),
                "unexpected error: {err:?}"
            );
        }
    }

    #[test]
    fn new_book_keeps_whitespace_as_given() {
        let book = NewBook::new(Some(" ".into()), Some("Anon ".into())).unwrap();
        assert_eq!(book.title(), " ");
        assert_eq!(book.author(), "Anon ");
    }

    #[test]
    fn sequence_ids_serialize_as_numbers() {
        let book = Book::from_new(
            1,
            NewBook::new(Some("1984".into()), Some("George Orwell".into())).unwrap(),
        );

        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({ "id": 1, "title": "1984", "author": "George Orwell" })
        );
    }

    #[test]
    fn object_ids_serialize_as_hex_strings() {
        let oid = ObjectId::parse_str("65f0c1a2b3c4d5e6f7a8b9c0").unwrap();
        let value = serde_json::to_value(BookId::from(oid)).unwrap();

        assert_eq!(value, json!("65f0c1a2b3c4d5e6f7a8b9c0"));
        assert_eq!(BookId::Object(oid).to_string(), "65f0c1a2b3c4d5e6f7a8b9c0");
    }
}
