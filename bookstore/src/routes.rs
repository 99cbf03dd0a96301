//! Handlers for the `/books` resource and the health check.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{info, instrument, warn};

use bookstore_core::{
    book::{Book, NewBook},
    store::BookStore,
};

use crate::{
    errors::{ApiError, json_message},
    payload::BookForm,
};

pub const DELETED_MESSAGE: &str = "Book deleted successfully";

/// Router for the book resource.
pub fn router() -> Router<Arc<BookStore>> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", get(get_book).delete(delete_book))
}

#[instrument(skip(store))]
pub async fn list_books(State(store): State<Arc<BookStore>>) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(store.list().await?))
}

#[instrument(skip(store, body))]
pub async fn create_book(
    State(store): State<Arc<BookStore>>,
    BookForm(body): BookForm,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = store
        .create(NewBook::new(body.title, body.author)?)
        .await?;

    info!(id = %book.id, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

#[instrument(skip(store))]
pub async fn get_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(store.get(&id).await?))
}

#[instrument(skip(store))]
pub async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let book = store.delete(&id).await?;

    info!(id = %book.id, "book deleted");
    Ok(json_message(StatusCode::OK, DELETED_MESSAGE))
}

/// Reports whether the storage backend answers.
#[instrument(skip(store))]
pub async fn health(State(store): State<Arc<BookStore>>) -> Response {
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "backend": store.backend_name(),
            })),
        )
            .into_response(),
        Err(err) => {
            warn!(error = %err, backend = store.backend_name(), "health check failed");
            json_message(StatusCode::SERVICE_UNAVAILABLE, "Storage backend unavailable")
        }
    }
}
