//! Test fixtures shared by the service and store tests.

use rust_decimal::Decimal;

use crate::domain::{
    carts::models::{Cart, CartId},
    items::models::{Item, ItemId},
    users::models::{User, UserId},
};

pub(crate) mod db;

pub(crate) fn make_item(id: i64, name: &str, price: i64) -> Item {
    Item {
        id: ItemId::new(id),
        name: name.to_string(),
        price: Decimal::from(price),
    }
}

pub(crate) fn make_user(username: &str, items: Vec<Item>) -> User {
    User {
        id: UserId::new(1),
        username: username.to_string(),
        cart: Cart::with_items(CartId::new(1), items),
    }
}
