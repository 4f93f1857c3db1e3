//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::{
        activity::{CartActivity, CartOperation},
        errors::CartsServiceError,
        models::{Cart, ModifyCart},
        repositories::CartsRepository,
    },
    items::ItemsRepository,
    users::UsersRepository,
};

/// Cart workflow over injected user, item and cart stores.
#[derive(Clone)]
pub struct StoreCartsService {
    users: Arc<dyn UsersRepository>,
    items: Arc<dyn ItemsRepository>,
    carts: Arc<dyn CartsRepository>,
    activity: Arc<dyn CartActivity>,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(
        users: Arc<dyn UsersRepository>,
        items: Arc<dyn ItemsRepository>,
        carts: Arc<dyn CartsRepository>,
        activity: Arc<dyn CartActivity>,
    ) -> Self {
        Self {
            users,
            items,
            carts,
            activity,
        }
    }

    async fn modify(
        &self,
        operation: CartOperation,
        request: ModifyCart,
    ) -> Result<Cart, CartsServiceError> {
        let ModifyCart {
            username,
            item,
            quantity,
        } = request;

        self.activity.started(operation, &username, item, quantity);

        let user = self
            .users
            .find_by_username(&username)
            .await
            .inspect_err(|error| self.activity.storage_failed(operation, error))?;

        let Some(mut user) = user else {
            self.activity.user_not_found(operation, &username);

            return Err(CartsServiceError::UserNotFound(username));
        };

        let found = self
            .items
            .find_by_id(item)
            .await
            .inspect_err(|error| self.activity.storage_failed(operation, error))?;

        let Some(found) = found else {
            self.activity.item_not_found(operation, item);

            return Err(CartsServiceError::ItemNotFound(item));
        };

        // Zero or negative quantities change nothing.
        let units = usize::try_from(quantity).unwrap_or(0);

        match operation {
            CartOperation::AddToCart => user.cart.add_units(&found, units),
            CartOperation::RemoveFromCart => user.cart.remove_units(&found, units),
        }

        let cart = self
            .carts
            .save(&user.cart)
            .await
            .inspect_err(|error| self.activity.storage_failed(operation, error))?;

        self.activity.completed(operation, &cart);

        Ok(cart)
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn add_to_cart(&self, request: ModifyCart) -> Result<Cart, CartsServiceError> {
        self.modify(CartOperation::AddToCart, request).await
    }

    async fn remove_from_cart(&self, request: ModifyCart) -> Result<Cart, CartsServiceError> {
        self.modify(CartOperation::RemoveFromCart, request).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add `quantity` units of an item to the user's cart and persist it.
    async fn add_to_cart(&self, request: ModifyCart) -> Result<Cart, CartsServiceError>;

    /// Remove up to `quantity` units of an item from the user's cart and
    /// persist it. Units that aren't in the cart are skipped.
    async fn remove_from_cart(&self, request: ModifyCart) -> Result<Cart, CartsServiceError>;
}
