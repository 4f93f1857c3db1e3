//! User Models

use crate::{domain::carts::models::Cart, ids::TypedId};

/// User Id
pub type UserId = TypedId<User>;

/// User Model
///
/// Every user owns exactly one cart.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub cart: Cart,
}

/// New User Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
}
