//! Cart Responses

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::{carts::models::Cart, items::models::Item};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The cart identifier
    pub id: i64,

    /// One entry per unit, in the order units were added
    pub items: Vec<CartItemResponse>,

    /// Sum of the unit prices
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            id: cart.id().into_inner(),
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            total: cart.total(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The item identifier
    pub id: i64,

    /// The item name
    pub name: String,

    /// The unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl From<&Item> for CartItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.into_inner(),
            name: item.name.clone(),
            price: item.price,
        }
    }
}
