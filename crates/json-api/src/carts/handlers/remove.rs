//! Remove From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use shopfront_app::carts::CartOperation;

use crate::{
    carts::{requests::ModifyCartRequest, responses::CartResponse},
    extensions::*,
    state::State,
};

use super::respond;

/// Remove From Cart Handler
///
/// Removes up to `quantity` units of the item from the user's cart and
/// returns the saved cart. Units that aren't in the cart are skipped.
#[endpoint(
    tags("carts"),
    summary = "Remove From Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "User or item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ModifyCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let result = state
        .app
        .carts
        .remove_from_cart(json.into_inner().into())
        .await;

    respond(CartOperation::RemoveFromCart, result)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::{
        carts::{CartsServiceError, MockCartsService, models::ModifyCart},
        items::models::ItemId,
    };

    use crate::test_helpers::{carts_service, make_cart, make_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("api/cart/removeFromCart").post(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_from_cart_success() -> TestResult {
        let fold = make_item(2, "Galaxy Fold", 25);
        let cart = make_cart(3, vec![fold]);

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .withf(|request| {
                *request
                    == ModifyCart {
                        username: "alice".to_string(),
                        item: ItemId::new(1),
                        quantity: 2,
                    }
            })
            .return_once(move |_| Ok(cart));

        carts.expect_add_to_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart/removeFromCart")
            .json(&json!({ "username": "alice", "itemId": 1, "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items.first().map(|item| item.id), Some(2));
        assert_eq!(body.total, Decimal::from(25));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_cart_unknown_user_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .return_once(|request| Err(CartsServiceError::UserNotFound(request.username)));

        carts.expect_add_to_cart().never();

        let res = TestClient::post("http://example.com/api/cart/removeFromCart")
            .json(&json!({ "username": "ghost", "itemId": 1, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_cart_unknown_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .return_once(|request| Err(CartsServiceError::ItemNotFound(request.item)));

        let res = TestClient::post("http://example.com/api/cart/removeFromCart")
            .json(&json!({ "username": "alice", "itemId": 404, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_cart_missing_field_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_remove_from_cart().never();

        let res = TestClient::post("http://example.com/api/cart/removeFromCart")
            .json(&json!({ "username": "alice", "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
