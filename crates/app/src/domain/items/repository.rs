//! Items Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::{Db, StorageError},
    domain::items::models::{Item, ItemId, NewItem},
};

const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const CREATE_ITEM_SQL: &str = include_str!("sql/create_item.sql");

#[automock]
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// Look up an item by id.
    async fn find_by_id(&self, item: ItemId) -> Result<Option<Item>, StorageError>;
}

#[derive(Debug, Clone)]
pub struct PgItemsRepository {
    db: Db,
}

impl PgItemsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Add an item to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidData`] for a negative price.
    pub async fn create_item(&self, item: NewItem) -> Result<Item, StorageError> {
        query_as::<Postgres, Item>(CREATE_ITEM_SQL)
            .bind(item.name)
            .bind(item.price)
            .fetch_one(self.db.pool())
            .await
            .map_err(Into::into)
    }
}

#[async_trait]
impl ItemsRepository for PgItemsRepository {
    async fn find_by_id(&self, item: ItemId) -> Result<Option<Item>, StorageError> {
        query_as::<Postgres, Item>(GET_ITEM_SQL)
            .bind(item.into_inner())
            .fetch_optional(self.db.pool())
            .await
            .map_err(Into::into)
    }
}

impl<'r> FromRow<'r, PgRow> for Item {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ItemId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
        })
    }
}
