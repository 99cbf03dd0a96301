use async_trait::async_trait;
use futures::TryStreamExt;
use bson::{Bson, Document, doc, de::deserialize_from_bson, oid::ObjectId};
use mongodb::{
    Client, Collection as MongoCollection,
    options::ClientOptions,
};
use serde::Deserialize;
use bookstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    book::{Book, BookId, NewBook},
    error::{StoreError, StoreResult},
};


/// Shape of a stored book document. Extra fields written by other tools are ignored.
#[derive(Debug, Deserialize)]
struct BookRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    author: String,
}

#[derive(Debug)]
pub struct MongoDbStore {
    client: Client,
    database: String,
    collection: String,
}

impl MongoDbStore {
    pub fn new(client: Client, database: String, collection: String) -> Self {
        Self { client, database, collection }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoDbStoreBuilder {
        MongoDbStoreBuilder::new(dsn, database)
    }

    fn get_collection(&self) -> MongoCollection<Document> {
        self.client
            .database(&self.database)
            .collection(&self.collection)
    }

    fn prepare_document(id: ObjectId, book: &NewBook) -> Document {
        doc! {
            "_id": id,
            "title": book.title(),
            "author": book.author(),
        }
    }

    fn restore_document(document: Document) -> StoreResult<Book> {
        let record: BookRecord = deserialize_from_bson(Bson::Document(document))?;

        Ok(Book {
            id: BookId::Object(record.id),
            title: record.title,
            author: record.author,
        })
    }

    fn object_id(id: &BookId) -> Option<ObjectId> {
        match id {
            BookId::Object(oid) => Some(*oid),
            BookId::Sequence(_) => None,
        }
    }

    async fn shutdown(self) -> StoreResult<()> {
        self.client.shutdown().await;

        Ok(())
    }
}

#[async_trait]
impl StoreBackend for MongoDbStore {
    fn name(&self) -> &'static str {
        "mongodb"
    }

    fn parse_id(&self, raw: &str) -> Option<BookId> {
        ObjectId::parse_str(raw).ok().map(BookId::Object)
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        self.get_collection()
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .into_iter()
            .map(Self::restore_document)
            .collect()
    }

    async fn insert_book(&self, book: NewBook) -> StoreResult<Book> {
        let id = ObjectId::new();

        self.get_collection()
            .insert_one(Self::prepare_document(id, &book))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(Book::from_new(id, book))
    }

    async fn find_book(&self, id: &BookId) -> StoreResult<Option<Book>> {
        let Some(oid) = Self::object_id(id) else {
            return Ok(None);
        };

        self.get_collection()
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .map(Self::restore_document)
            .transpose()
    }

    async fn delete_book(&self, id: &BookId) -> StoreResult<Option<Book>> {
        let Some(oid) = Self::object_id(id) else {
            return Ok(None);
        };

        self.get_collection()
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .map(Self::restore_document)
            .transpose()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn shutdown(self) -> StoreResult<()> {
        self.shutdown().await
    }
}

pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
    collection: String,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
            collection: Book::COLLECTION.to_string(),
        }
    }

    /// Overrides the collection books are stored in.
    pub fn collection(mut self, collection: &str) -> Self {
        self.collection = collection.to_string();
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for MongoDbStoreBuilder {
    type Backend = MongoDbStore;

    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(MongoDbStore::new(
            Client::with_options(
                ClientOptions::parse(&self.dsn)
                    .await
                    .map_err(|e| StoreError::Initialization(e.to_string()))?,
            )
            .map_err(|e| StoreError::Initialization(e.to_string()))?,
            self.database,
            self.collection,
        ))
    }
}
