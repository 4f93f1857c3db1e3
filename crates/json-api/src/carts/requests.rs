//! Cart Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::{carts::models::ModifyCart, items::models::ItemId};

/// Modify Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModifyCartRequest {
    /// Username owning the cart
    pub username: String,

    /// Item to add or remove
    pub item_id: i64,

    /// Units to add or remove; zero or less leaves the cart as it is
    pub quantity: i32,
}

impl From<ModifyCartRequest> for ModifyCart {
    fn from(request: ModifyCartRequest) -> Self {
        ModifyCart {
            username: request.username,
            item: ItemId::new(request.item_id),
            quantity: request.quantity,
        }
    }
}
