//! Cart Handlers

use salvo::prelude::{Json, StatusError};

use shopfront_app::carts::{CartOperation, CartsServiceError, models::Cart};

use crate::{
    carts::{
        errors::{into_status_error, outcome},
        responses::CartResponse,
    },
    observability::observe_cart_update,
};

pub(crate) mod add;
pub(crate) mod remove;

fn respond(
    operation: CartOperation,
    result: Result<Cart, CartsServiceError>,
) -> Result<Json<CartResponse>, StatusError> {
    observe_cart_update(operation.as_str(), outcome(&result));

    result
        .map(|cart| Json(cart.into()))
        .map_err(into_status_error)
}
