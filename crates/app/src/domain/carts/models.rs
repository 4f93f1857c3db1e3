//! Cart Models

use std::iter;

use rust_decimal::Decimal;

use crate::{
    domain::items::models::{Item, ItemId},
    ids::TypedId,
};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Cart Modification
///
/// Adds or removes `quantity` units of an item in a user's cart. A quantity
/// of zero or less changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyCart {
    pub username: String,
    pub item: ItemId,
    pub quantity: i32,
}

/// Cart Model
///
/// Holds one entry per item unit, in the order the units were added. The
/// total is rebuilt from the units on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    id: CartId,
    items: Vec<Item>,
    total: Decimal,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// A cart holding the given units, with its total computed from them.
    #[must_use]
    pub fn with_items(id: CartId, items: Vec<Item>) -> Self {
        let mut cart = Self {
            id,
            items,
            total: Decimal::ZERO,
        };

        cart.recompute_total();

        cart
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Append one unit of `item`.
    pub fn add_item(&mut self, item: &Item) {
        self.add_units(item, 1);
    }

    /// Remove the first unit with the same id as `item`, if there is one.
    pub fn remove_item(&mut self, item: &Item) {
        self.remove_units(item, 1);
    }

    /// Append `count` units of `item`, recomputing the total once.
    ///
    /// Every unit is stored, so `count` is bounded by available memory.
    pub fn add_units(&mut self, item: &Item, count: usize) {
        self.items.extend(iter::repeat_n(item.clone(), count));
        self.recompute_total();
    }

    /// Remove up to `count` units with the same id as `item`, earliest first.
    /// Missing units are skipped.
    pub fn remove_units(&mut self, item: &Item, count: usize) {
        let mut remaining = count;

        self.items.retain(|unit| {
            if remaining > 0 && unit.id == item.id {
                remaining -= 1;
                false
            } else {
                true
            }
        });

        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(|unit| unit.price).sum();
    }
}
