//! Store selection

use thiserror::Error;
use tracing::{info, warn};

use shopfront_app::{
    context::{AppContext, AppInitError},
    memory::InMemoryStore,
    seed::{Seed, SeedError},
};

use crate::config::store::StoreConfig;

#[derive(Debug, Error)]
pub(crate) enum StoreInitError {
    #[error("failed to initialise postgres store: {0}")]
    Postgres(#[from] AppInitError),

    #[error("failed to seed in-memory store: {0}")]
    Seed(#[from] SeedError),
}

/// Build the application context over Postgres when a database URL is
/// configured, otherwise over a (possibly seeded) in-memory store.
pub(crate) async fn app_context(config: &StoreConfig) -> Result<AppContext, StoreInitError> {
    if let Some(url) = &config.database_url {
        let app = AppContext::from_database_url(url).await?;

        info!("using postgres store");

        return Ok(app);
    }

    let store = InMemoryStore::new();

    match &config.seed_file {
        Some(path) => {
            Seed::from_path(path)?.apply(&store).await?;

            info!(seed_file = %path.display(), "using seeded in-memory store");
        }
        None => warn!("no database or seed file configured; using an empty in-memory store"),
    }

    Ok(AppContext::in_memory(&store))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use shopfront_app::{
        carts::{CartsService, models::ModifyCart},
        items::models::ItemId,
    };

    use super::*;

    #[tokio::test]
    async fn seed_file_backs_the_cart_service() -> TestResult {
        let mut file = NamedTempFile::new()?;

        file.write_all(b"users:\n  - username: alice\nitems:\n  - id: 1\n    name: Pixel 4a\n    price: 50\n")?;

        let app = app_context(&StoreConfig {
            database_url: None,
            seed_file: Some(file.path().to_path_buf()),
        })
        .await?;

        let cart = app
            .carts
            .add_to_cart(ModifyCart {
                username: "alice".to_string(),
                item: ItemId::new(1),
                quantity: 2,
            })
            .await?;

        assert_eq!(cart.items().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn unreadable_seed_file_fails_startup() {
        let result = app_context(&StoreConfig {
            database_url: None,
            seed_file: Some("/nonexistent/seed.yaml".into()),
        })
        .await;

        assert!(
            matches!(result, Err(StoreInitError::Seed(SeedError::Io(_)))),
            "expected a seed io error"
        );
    }
}
