//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    add_to_wishlist_handler, apply_coupon_handler, clear_cart_handler, create_cash_order_handler,
    create_order_handler, get_address_handler, get_cart_handler, get_wishlist_handler,
    list_orders_handler, remove_from_wishlist_handler, replace_cart_handler, save_address_handler,
    update_profile_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /user/cart`                    - Replace the cart
/// - `GET    /user/cart`                    - Fetch the cart, products expanded
/// - `DELETE /user/cart`                    - Empty the cart
/// - `POST   /user/cart/coupon`             - Apply a coupon to the cart
/// - `POST   /user/order`                   - Create an order from a paid checkout
/// - `POST   /user/cash-order`              - Create a cash-on-delivery order
/// - `GET    /user/orders`                  - List the user's orders
/// - `POST   /user/wishlist`                - Add a product to the wishlist
/// - `GET    /user/wishlist`                - Fetch the wishlist, products expanded
/// - `DELETE /user/wishlist/{product_id}`   - Remove a product from the wishlist
/// - `POST   /user/address`                 - Save the shipping address
/// - `GET    /user/address`                 - Fetch the shipping address
/// - `PUT    /user/profile`                 - Update the display name
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user/cart",
            post(replace_cart_handler)
                .get(get_cart_handler)
                .delete(clear_cart_handler),
        )
        .route("/user/cart/coupon", post(apply_coupon_handler))
        .route("/user/order", post(create_order_handler))
        .route("/user/cash-order", post(create_cash_order_handler))
        .route("/user/orders", get(list_orders_handler))
        .route(
            "/user/wishlist",
            post(add_to_wishlist_handler).get(get_wishlist_handler),
        )
        .route(
            "/user/wishlist/{product_id}",
            delete(remove_from_wishlist_handler),
        )
        .route(
            "/user/address",
            post(save_address_handler).get(get_address_handler),
        )
        .route("/user/profile", put(update_profile_handler))
}
