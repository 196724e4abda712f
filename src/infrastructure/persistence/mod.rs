//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User records and wishlist set operations
//! - [`PgProductRepository`] - Catalog reads and batched stock adjustments
//! - [`PgCartRepository`] - Single-cart-per-user upsert storage
//! - [`PgCouponRepository`] - Coupon lookup and admin management
//! - [`PgOrderRepository`] - Immutable order storage with JSONB payments
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_cart_repository;
pub mod pg_coupon_repository;
pub mod pg_order_repository;
pub mod pg_product_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_cart_repository::PgCartRepository;
pub use pg_coupon_repository::PgCouponRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
