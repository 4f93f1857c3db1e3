//! Errors

use salvo::http::StatusError;

use shopfront_app::carts::{CartsServiceError, models::Cart};

/// Storage failures are already reported by the service's `CartActivity`.
pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::UserNotFound(_) | CartsServiceError::ItemNotFound(_) => {
            StatusError::not_found()
        }
        CartsServiceError::Storage(_) => StatusError::internal_server_error(),
    }
}

/// Metric label for the result of a cart update.
pub(crate) fn outcome(result: &Result<Cart, CartsServiceError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(CartsServiceError::UserNotFound(_)) => "user_not_found",
        Err(CartsServiceError::ItemNotFound(_)) => "item_not_found",
        Err(CartsServiceError::Storage(_)) => "storage_error",
    }
}
