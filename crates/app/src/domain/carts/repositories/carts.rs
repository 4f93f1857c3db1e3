//! Carts Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction, query, query_scalar};
use tracing::debug;

use crate::{
    database::{Db, StorageError},
    domain::carts::models::{Cart, CartId},
};

use super::items::PgCartItemsRepository;

const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const UPDATE_CART_TOTAL_SQL: &str = include_str!("../sql/update_cart_total.sql");

#[automock]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    /// Persist the cart's units and total, returning the stored cart.
    async fn save(&self, cart: &Cart) -> Result<Cart, StorageError>;
}

#[derive(Debug, Clone)]
pub struct PgCartsRepository {
    db: Db,
    items: PgCartItemsRepository,
}

impl PgCartsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items: PgCartItemsRepository::new(),
        }
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<CartId, sqlx::Error> {
        let id = query_scalar::<Postgres, i64>(CREATE_CART_SQL).fetch_one(&mut **tx).await?;

        Ok(CartId::new(id))
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<Cart, sqlx::Error> {
        let items = self.items.get_cart_items(tx, cart).await?;

        Ok(Cart::with_items(cart, items))
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn save(&self, cart: &Cart) -> Result<Cart, StorageError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = query(UPDATE_CART_TOTAL_SQL)
            .bind(cart.id().into_inner())
            .bind(cart.total())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StorageError::NotFound);
        }

        let units = self
            .items
            .replace_cart_items(&mut tx, cart.id(), cart.items())
            .await?;

        tx.commit().await?;

        debug!(cart = %cart.id(), units, "cart saved");

        Ok(cart.clone())
    }
}
