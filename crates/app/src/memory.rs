//! In-memory store
//!
//! Backs every repository with process-local tables. Carts hold item ids and
//! are resolved against the current catalogue when loaded.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    database::StorageError,
    domain::{
        carts::{
            CartsRepository,
            models::{Cart, CartId},
        },
        items::{
            ItemsRepository,
            models::{Item, ItemId},
        },
        users::{
            UsersRepository,
            models::{NewUser, User, UserId},
        },
    },
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<String, (UserId, CartId)>,
    carts: HashMap<CartId, Vec<ItemId>>,
    items: BTreeMap<ItemId, Item>,
    next_user: i64,
    next_cart: i64,
}

impl Tables {
    fn cart(&self, id: CartId) -> Result<Cart, StorageError> {
        let units = self.carts.get(&id).ok_or(StorageError::NotFound)?;

        let items = units
            .iter()
            .map(|unit| {
                self.items
                    .get(unit)
                    .cloned()
                    .ok_or(StorageError::InvalidReference)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_items(id, items))
    }
}

/// Shop data held in memory, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user along with their empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] when the username is taken.
    pub async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut tables = self.tables.write().await;

        if tables.users.contains_key(&user.username) {
            return Err(StorageError::AlreadyExists);
        }

        tables.next_user += 1;
        tables.next_cart += 1;

        let id = UserId::new(tables.next_user);
        let cart = CartId::new(tables.next_cart);

        tables.carts.insert(cart, Vec::new());
        tables.users.insert(user.username.clone(), (id, cart));

        Ok(User {
            id,
            username: user.username,
            cart: Cart::new(cart),
        })
    }

    /// Add an item to the catalogue, replacing any item with the same id.
    pub async fn insert_item(&self, item: Item) {
        self.tables.write().await.items.insert(item.id, item);
    }
}

#[async_trait]
impl UsersRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;

        let Some(&(id, cart)) = tables.users.get(username) else {
            return Ok(None);
        };

        Ok(Some(User {
            id,
            username: username.to_string(),
            cart: tables.cart(cart)?,
        }))
    }
}

#[async_trait]
impl ItemsRepository for InMemoryStore {
    async fn find_by_id(&self, item: ItemId) -> Result<Option<Item>, StorageError> {
        Ok(self.tables.read().await.items.get(&item).cloned())
    }
}

#[async_trait]
impl CartsRepository for InMemoryStore {
    async fn save(&self, cart: &Cart) -> Result<Cart, StorageError> {
        let mut tables = self.tables.write().await;

        if !tables.carts.contains_key(&cart.id()) {
            return Err(StorageError::NotFound);
        }

        if cart
            .items()
            .iter()
            .any(|unit| !tables.items.contains_key(&unit.id))
        {
            return Err(StorageError::InvalidReference);
        }

        let units = cart.items().iter().map(|unit| unit.id).collect();

        tables.carts.insert(cart.id(), units);

        Ok(cart.clone())
    }
}
