//! Add To Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use shopfront_app::carts::CartOperation;

use crate::{
    carts::{requests::ModifyCartRequest, responses::CartResponse},
    extensions::*,
    state::State,
};

use super::respond;

/// Add To Cart Handler
///
/// Appends `quantity` units of the item to the user's cart and returns the
/// saved cart.
#[endpoint(
    tags("carts"),
    summary = "Add To Cart",
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

    let result = state.app.carts.add_to_cart(json.into_inner().into()).await;

    respond(CartOperation::AddToCart, result)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::{
        carts::{CartsServiceError, MockCartsService, models::ModifyCart},
        database::StorageError,
        items::models::ItemId,
    };

    use crate::test_helpers::{carts_service, make_cart, make_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart/addToCart").post(handler))
    }

    fn alice_adds(item: i64, quantity: i32) -> ModifyCart {
        ModifyCart {
            username: "alice".to_string(),
            item: ItemId::new(item),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_add_to_cart_success() -> TestResult {
        let phone = make_item(1, "Pixel 4a", 50);
        let cart = make_cart(3, vec![phone.clone(); 4]);

        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .withf(|request| *request == alice_adds(1, 4))
            .return_once(move |_| Ok(cart));

        carts.expect_remove_from_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart/addToCart")
            .json(&json!({ "username": "alice", "itemId": 1, "quantity": 4 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.id, 3);
        assert_eq!(body.items.len(), 4);
        assert_eq!(body.total, Decimal::from(200));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_renders_prices_as_numbers() -> TestResult {
        let cart = make_cart(3, vec![make_item(1, "Pixel 4a", 50)]);

        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().return_once(move |_| Ok(cart));

        let mut res = TestClient::post("http://example.com/api/cart/addToCart")
            .json(&json!({ "username": "alice", "itemId": 1, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(
            body,
            json!({
                "id": 3,
                "items": [{ "id": 1, "name": "Pixel 4a", "price": 50.0 }],
                "total": 50.0,
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_user_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|request| Err(CartsServiceError::UserNotFound(request.username)));

        let res = TestClient::post("http://example.com/api/cart/addToCart")
            .json(&json!({ "username": "ghost", "itemId": 1, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|request| Err(CartsServiceError::ItemNotFound(request.item)));

        let res = TestClient::post("http://example.com/api/cart/addToCart")
            .json(&json!({ "username": "alice", "itemId": 404, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_storage_failure_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::Storage(StorageError::InvalidReference)));

        let res = TestClient::post("http://example.com/api/cart/addToCart")
            .json(&json!({ "username": "alice", "itemId": 1, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_malformed_body_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().never();

        let res = TestClient::post("http://example.com/api/cart/addToCart")
            .json(&json!({ "username": "alice", "itemId": "one", "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
