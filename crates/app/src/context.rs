//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsRepository, StoreCartsService, TracingCartActivity},
        items::PgItemsRepository,
        users::PgUsersRepository,
    },
    memory::InMemoryStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or running
    /// migrations fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        let db = Db::new(pool);

        Ok(Self {
            carts: Arc::new(StoreCartsService::new(
                Arc::new(PgUsersRepository::new(db.clone())),
                Arc::new(PgItemsRepository::new(db.clone())),
                Arc::new(PgCartsRepository::new(db)),
                Arc::new(TracingCartActivity),
            )),
        })
    }

    /// Build application context over an in-memory store.
    #[must_use]
    pub fn in_memory(store: &InMemoryStore) -> Self {
        Self {
            carts: Arc::new(StoreCartsService::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                Arc::new(TracingCartActivity),
            )),
        }
    }
}
