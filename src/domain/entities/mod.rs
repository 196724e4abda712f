//! Core domain entities representing the storefront data model.
//!
//! Entities are plain data structures without business logic. Separate
//! `New*` structs carry creation input, mirroring the rows they become.
//!
//! # Entity Types
//!
//! - [`User`] / [`Address`] - A customer and their structured shipping address
//! - [`Product`] - A catalog item with stock counters
//! - [`Cart`] / [`LineItem`] - A per-user snapshot of selected products
//! - [`Coupon`] - A percentage discount matched by exact name
//! - [`Order`] / [`PaymentIntent`] - An immutable checkout record

pub mod cart;
pub mod coupon;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, LineItem, NewCart, round2};
pub use coupon::{Coupon, NewCoupon};
pub use order::{NewOrder, Order, OrderStatus, PaymentIntent};
pub use product::{Product, StockAdjustment};
pub use user::{Address, User};
