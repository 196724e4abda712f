//! Data Transfer Objects for request/response serialization.
//!
//! Wire field names follow the storefront clients' existing contract:
//! camelCase keys and `_id` for document references. Inbound shapes are
//! validated with `validator` before any service call.

pub mod address;
pub mod cart;
pub mod checkout;
pub mod common;
pub mod coupon;
pub mod health;
pub mod profile;
pub mod wishlist;
