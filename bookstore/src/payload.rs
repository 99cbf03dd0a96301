//! Request body extraction for book creation.
//!
//! Clients may send the new book either as JSON or as an HTML form. [`BookForm`] picks
//! the decoder from the `Content-Type` header. Anything else, including a missing header
//! or an empty JSON body, yields no fields and is left to the presence check.

use axum::{
    Form, Json, async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::Deserialize;

use crate::errors::ApiError;

/// Raw creation fields, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Extractor accepting `application/json` and `application/x-www-form-urlencoded` bodies.
#[derive(Debug)]
pub struct BookForm(pub CreateBookRequest);

#[async_trait]
impl<S> FromRequest<S> for BookForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Self(CreateBookRequest::default()));
            }

            let Json(body) = Json::<CreateBookRequest>::from_bytes(&bytes)
                .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

            return Ok(Self(body));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<CreateBookRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

            return Ok(Self(body));
        }

        Ok(Self(CreateBookRequest::default()))
    }
}
