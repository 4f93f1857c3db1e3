//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use shopfront_app::{
    carts::{
        MockCartsService,
        models::{Cart, CartId},
    },
    context::AppContext,
    items::models::{Item, ItemId},
};

use crate::state::State;

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        carts: Arc::new(carts),
    })
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

pub(crate) fn make_item(id: i64, name: &str, price: i64) -> Item {
    Item {
        id: ItemId::new(id),
        name: name.to_string(),
        price: Decimal::from(price),
    }
}

pub(crate) fn make_cart(id: i64, items: Vec<Item>) -> Cart {
    Cart::with_items(CartId::new(id), items)
}
