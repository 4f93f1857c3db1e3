//! Cart activity reporting.

use std::fmt::{Display, Formatter, Result as FmtResult};

use mockall::automock;
use tracing::{error, info, warn};

use crate::{
    database::StorageError,
    domain::{carts::models::Cart, items::models::ItemId},
};

/// Cart mutation being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddToCart,
    RemoveFromCart,
}

impl CartOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddToCart => "add_to_cart",
            Self::RemoveFromCart => "remove_from_cart",
        }
    }
}

impl Display for CartOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Receives the notable steps of a cart mutation.
#[automock]
pub trait CartActivity: Send + Sync {
    fn started(&self, operation: CartOperation, username: &str, item: ItemId, quantity: i32);

    fn user_not_found(&self, operation: CartOperation, username: &str);

    fn item_not_found(&self, operation: CartOperation, item: ItemId);

    fn storage_failed(&self, operation: CartOperation, error: &StorageError);

    fn completed(&self, operation: CartOperation, cart: &Cart);
}

/// [`CartActivity`] that emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCartActivity;

impl CartActivity for TracingCartActivity {
    fn started(&self, operation: CartOperation, username: &str, item: ItemId, quantity: i32) {
        info!(%operation, username, %item, quantity, "cart update started");
    }

    fn user_not_found(&self, operation: CartOperation, username: &str) {
        warn!(%operation, username, "cart update failed: user not found");
    }

    fn item_not_found(&self, operation: CartOperation, item: ItemId) {
        warn!(%operation, %item, "cart update failed: item not found");
    }

    fn storage_failed(&self, operation: CartOperation, error: &StorageError) {
        error!(%operation, "cart update failed: {error}");
    }

    fn completed(&self, operation: CartOperation, cart: &Cart) {
        info!(
            %operation,
            cart = %cart.id(),
            units = cart.items().len(),
            total = %cart.total(),
            "cart updated"
        );
    }
}
