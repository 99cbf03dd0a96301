//! HTTP application wiring (axum router + storage backend selection).

use std::sync::Arc;

use axum::{Router, routing::get};
use tracing::{error, info};

use bookstore_core::{backend::StoreBackendBuilder, store::BookStore};
use bookstore_memory::InMemoryStore;
#[cfg(feature = "mongodb")]
use bookstore_mongodb::MongoDbStore;

use crate::{
    config::{BackendKind, Config},
    routes,
};

/// Build the full HTTP router (public entrypoint used by `main.rs` and the black-box tests).
pub fn build_app(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router())
        .with_state(store)
}

/// Builds the storage backend selected by `config`.
///
/// Backends connect lazily, so an unreachable database does not fail here; see
/// [`probe_store`].
pub async fn connect_store(config: &Config) -> anyhow::Result<BookStore> {
    let store = match config.backend {
        BackendKind::Memory => {
            let builder = if config.no_seed {
                InMemoryStore::builder()
            } else {
                InMemoryStore::builder().seeded()
            };

            BookStore::new(builder.build().await?)
        }
        #[cfg(feature = "mongodb")]
        BackendKind::Mongodb => BookStore::new(
            MongoDbStore::builder(&config.mongodb_uri, &config.database)
                .collection(&config.collection)
                .build()
                .await?,
        ),
        #[cfg(not(feature = "mongodb"))]
        BackendKind::Mongodb => {
            anyhow::bail!("this build has no mongodb backend; rebuild with `--features mongodb`")
        }
    };

    info!(backend = store.backend_name(), "storage backend configured");
    Ok(store)
}

/// Pings the backend once and logs the outcome. A failure is only logged; the HTTP
/// listener keeps serving and requests report their own storage errors.
pub async fn probe_store(store: Arc<BookStore>) {
    match store.ping().await {
        Ok(()) => info!(backend = store.backend_name(), "connected to storage backend"),
        Err(err) => error!(
            backend = store.backend_name(),
            error = %err,
            "storage backend connection failed"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn memory_backend_is_seeded_unless_disabled() {
        let seeded = connect_store(&Config::try_parse_from(["bookstore"]).unwrap())
            .await
            .unwrap();
        assert_eq!(seeded.backend_name(), "memory");
        assert_eq!(seeded.list().await.unwrap().len(), 2);

        let empty = connect_store(&Config::try_parse_from(["bookstore", "--no-seed"]).unwrap())
            .await
            .unwrap();
        assert!(empty.list().await.unwrap().is_empty());
    }
}
