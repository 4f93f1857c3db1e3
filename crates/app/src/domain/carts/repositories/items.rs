//! Cart Items Repository

use sqlx::{Postgres, Transaction, query, query_as};

use crate::domain::{carts::models::CartId, items::models::Item};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const CREATE_CART_ITEMS_SQL: &str = include_str!("../sql/create_cart_items.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("../sql/delete_cart_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<Vec<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(GET_CART_ITEMS_SQL)
            .bind(cart.into_inner())
            .fetch_all(&mut **tx)
            .await
    }

    /// Rewrite the unit rows of `cart` so their order matches `items`.
    pub(crate) async fn replace_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
        items: &[Item],
    ) -> Result<u64, sqlx::Error> {
        query(DELETE_CART_ITEMS_SQL)
            .bind(cart.into_inner())
            .execute(&mut **tx)
            .await?;

        let item_ids: Vec<i64> = items.iter().map(|item| item.id.into_inner()).collect();

        let rows_affected = query(CREATE_CART_ITEMS_SQL)
            .bind(cart.into_inner())
            .bind(item_ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
