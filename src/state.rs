//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CartService, CouponService, OrderService, ProfileService, WishlistService,
};

/// Application-wide service graph.
///
/// Built once at startup over the Postgres repositories; handler tests
/// build the same graph over mocks.
#[derive(Clone)]
pub struct AppState {
    pub cart_service: Arc<CartService>,
    pub coupon_service: Arc<CouponService>,
    pub order_service: Arc<OrderService>,
    pub wishlist_service: Arc<WishlistService>,
    pub profile_service: Arc<ProfileService>,
    pub auth_service: Arc<AuthService>,
}
