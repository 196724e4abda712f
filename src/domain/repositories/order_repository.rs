//! Repository trait for order persistence.

use crate::domain::entities::{NewOrder, Order};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for immutable orders.
///
/// Orders are written exactly once per checkout and never mutated by this
/// service afterwards.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order together with its line-item snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError>;

    /// Lists a user's orders, newest first, each with its line items.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, AppError>;
}
