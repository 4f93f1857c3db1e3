//! Seed data for the in-memory store.

use std::{fs, io, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    database::StorageError,
    domain::{
        items::models::{Item, ItemId},
        users::models::NewUser,
    },
    memory::InMemoryStore,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file")]
    Io(#[from] io::Error),

    #[error("failed to parse seed file")]
    Parse(#[from] serde_norway::Error),

    #[error("failed to load seed data")]
    Storage(#[from] StorageError),
}

/// Users and catalogue items to load at startup.
///
/// ```yaml
/// users:
///   - username: alice
/// items:
///   - id: 1
///     name: Pixel 4a
///     price: 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<SeedUser>,

    #[serde(default)]
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedUser {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedItem {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
}

impl Seed {
    /// Read a seed document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file can't be read or isn't valid YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Parse a seed document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document doesn't match the seed layout.
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load every user and item into `store`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] for a repeated username.
    pub async fn apply(self, store: &InMemoryStore) -> Result<(), SeedError> {
        for item in self.items {
            store
                .insert_item(Item {
                    id: item.id,
                    name: item.name,
                    price: item.price,
                })
                .await;
        }

        for user in self.users {
            store
                .create_user(NewUser {
                    username: user.username,
                })
                .await?;
        }

        Ok(())
    }
}
