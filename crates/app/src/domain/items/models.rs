//! Item Models

use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Item Id
pub type ItemId = TypedId<Item>;

/// Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
}

/// New Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: Decimal,
}
