//! HTTP request handlers for the storefront API.

pub mod cart;
pub mod coupon;
pub mod health;
pub mod orders;
pub mod profile;
pub mod wishlist;

pub use cart::{clear_cart_handler, get_cart_handler, replace_cart_handler};
pub use coupon::apply_coupon_handler;
pub use health::health_handler;
pub use orders::{create_cash_order_handler, create_order_handler, list_orders_handler};
pub use profile::{get_address_handler, save_address_handler, update_profile_handler};
pub use wishlist::{add_to_wishlist_handler, get_wishlist_handler, remove_from_wishlist_handler};

#[cfg(test)]
pub(crate) mod testing {
    //! Shared scaffolding for handler tests: a bundle of mock repositories
    //! and a way to wire them into a full [`AppState`].

    use std::sync::Arc;

    use crate::application::services::{
        AuthService, CartService, CouponService, OrderService, ProfileService, WishlistService,
    };
    use crate::domain::repositories::{
        MockCartRepository, MockCouponRepository, MockOrderRepository, MockProductRepository,
        MockTokenRepository, MockUserRepository,
    };
    use crate::state::AppState;

    /// One mock per repository trait. Tests set expectations on the fields
    /// they care about, then call [`MockRepos::into_state`].
    pub struct MockRepos {
        pub users: MockUserRepository,
        pub products: MockProductRepository,
        pub carts: MockCartRepository,
        pub coupons: MockCouponRepository,
        pub orders: MockOrderRepository,
        pub tokens: MockTokenRepository,
    }

    impl MockRepos {
        pub fn new() -> Self {
            Self {
                users: MockUserRepository::new(),
                products: MockProductRepository::new(),
                carts: MockCartRepository::new(),
                coupons: MockCouponRepository::new(),
                orders: MockOrderRepository::new(),
                tokens: MockTokenRepository::new(),
            }
        }

        /// Wires the mocks into the same service graph the server builds
        /// over Postgres repositories.
        pub fn into_state(self) -> AppState {
            let users = Arc::new(self.users);
            let products = Arc::new(self.products);
            let carts = Arc::new(self.carts);
            let coupons = Arc::new(self.coupons);
            let orders = Arc::new(self.orders);
            let tokens = Arc::new(self.tokens);

            AppState {
                cart_service: Arc::new(CartService::new(
                    carts.clone(),
                    products.clone(),
                    users.clone(),
                )),
                coupon_service: Arc::new(CouponService::new(
                    coupons.clone(),
                    carts.clone(),
                    users.clone(),
                )),
                order_service: Arc::new(OrderService::new(
                    orders.clone(),
                    carts.clone(),
                    products.clone(),
                    users.clone(),
                )),
                wishlist_service: Arc::new(WishlistService::new(users.clone())),
                profile_service: Arc::new(ProfileService::new(users.clone())),
                auth_service: Arc::new(AuthService::new(
                    tokens.clone(),
                    "test-signing-secret".to_string(),
                )),
            }
        }
    }
}
