//! Carts service errors.

use thiserror::Error;

use crate::{database::StorageError, domain::items::models::ItemId};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("user {0:?} not found")]
    UserNotFound(String),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("storage error")]
    Storage(#[from] StorageError),
}
