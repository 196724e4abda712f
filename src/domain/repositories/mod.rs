//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User records and wishlist set operations
//! - [`ProductRepository`] - Catalog reads and stock adjustments
//! - [`CartRepository`] - Single-cart-per-user persistence
//! - [`CouponRepository`] - Coupon lookup and admin management
//! - [`OrderRepository`] - Immutable order storage
//! - [`TokenRepository`] - API token authentication

pub mod cart_repository;
pub mod coupon_repository;
pub mod order_repository;
pub mod product_repository;
pub mod token_repository;
pub mod user_repository;

pub use cart_repository::CartRepository;
pub use coupon_repository::CouponRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use token_repository::{ApiToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use coupon_repository::MockCouponRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
