//! App Router

use salvo::{
    Request, Response, Router,
    catcher::Catcher,
    handler,
    http::{ResBody, StatusCode},
    prelude::FlowCtrl,
};

use crate::carts;

const CART_PATH_PREFIX: &str = "/api/cart/";

pub fn app_router() -> Router {
    Router::with_path("api/cart")
        .push(Router::with_path("addToCart").post(carts::add::handler))
        .push(Router::with_path("removeFromCart").post(carts::remove::handler))
}

/// Error catcher for the service.
///
/// Cart routes answer a missing user or item with a bare 404; every other
/// error falls through to salvo's default error page.
pub fn app_catcher() -> Catcher {
    Catcher::default().hoop(empty_cart_not_found)
}

#[handler]
async fn empty_cart_not_found(req: &mut Request, res: &mut Response, ctrl: &mut FlowCtrl) {
    if res.status_code == Some(StatusCode::NOT_FOUND)
        && req.uri().path().starts_with(CART_PATH_PREFIX)
    {
        res.replace_body(ResBody::None);
        ctrl.skip_rest();
    }
}
