//! Application services orchestrating repository calls per storefront
//! operation.
//!
//! One service per handler family:
//!
//! - [`CartService`] - cart replacement, retrieval, clearing
//! - [`CouponService`] - coupon validation and cart discounting
//! - [`OrderService`] - paid and cash-on-delivery checkout, order listing
//! - [`WishlistService`] - wishlist set maintenance
//! - [`ProfileService`] - address and display-name updates
//! - [`AuthService`] - bearer token authentication

pub mod auth_service;
pub mod cart_service;
pub mod coupon_service;
pub mod order_service;
pub mod profile_service;
pub mod wishlist_service;

pub use auth_service::AuthService;
pub use cart_service::{CartDetails, CartSelection, CartService};
pub use coupon_service::{CouponOutcome, CouponService};
pub use order_service::{OrderDetails, OrderService};
pub use profile_service::ProfileService;
pub use wishlist_service::{WishlistDetails, WishlistService};
