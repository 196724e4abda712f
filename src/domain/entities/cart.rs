//! Cart entity: a per-user snapshot of selected products and their prices.

use chrono::{DateTime, Utc};

/// One product selection within a cart or order.
///
/// `price` is the catalog unit price snapshotted at the moment the cart was
/// submitted; later catalog changes never flow back into stored line items.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: i64,
    pub count: i32,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: f64,
}

impl LineItem {
    /// Line total at the snapshotted unit price.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.count)
    }
}

/// A user's single active cart.
///
/// Uniqueness per user is a database constraint; replacement is an upsert
/// keyed by `user_id`, so a reader never observes a missing cart between a
/// delete and a re-insert.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub lines: Vec<LineItem>,
    pub cart_total: f64,
    pub total_after_discount: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Input data for replacing a user's cart.
#[derive(Debug, Clone)]
pub struct NewCart {
    pub user_id: i64,
    pub lines: Vec<LineItem>,
    pub cart_total: f64,
}

/// Rounds a monetary amount to two decimal places.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
