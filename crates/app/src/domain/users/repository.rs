//! Users Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, query_as};

use crate::{
    database::{Db, StorageError},
    domain::{
        carts::{
            PgCartsRepository,
            models::{Cart, CartId},
        },
        users::models::{NewUser, User, UserId},
    },
};

const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");

#[automock]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Look up a user, together with their cart, by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;
}

#[derive(Debug, Clone)]
pub struct PgUsersRepository {
    db: Db,
    carts: PgCartsRepository,
}

impl PgUsersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            carts: PgCartsRepository::new(db.clone()),
            db,
        }
    }

    /// Register a user along with their empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] when the username is taken.
    pub async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts.create_cart(&mut tx).await?;

        let (id, username, _cart): (i64, String, i64) = query_as(CREATE_USER_SQL)
            .bind(user.username)
            .bind(cart.into_inner())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(User {
            id: UserId::new(id),
            username,
            cart: Cart::new(cart),
        })
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let mut tx = self.db.begin().await?;

        let row = query_as::<Postgres, (i64, String, i64)>(GET_USER_SQL)
            .bind(username)
            .fetch_optional(&mut *tx)
            .await?;

        let Some((id, username, cart)) = row else {
            tx.commit().await?;

            return Ok(None);
        };

        let cart = self.carts.get_cart(&mut tx, CartId::new(cart)).await?;

        tx.commit().await?;

        Ok(Some(User {
            id: UserId::new(id),
            username,
            cart,
        }))
    }
}
