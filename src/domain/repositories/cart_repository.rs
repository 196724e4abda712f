//! Repository trait for cart persistence.

use crate::domain::entities::{Cart, NewCart};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the single-cart-per-user invariant.
///
/// Uniqueness is enforced by the store (UNIQUE on `user_id`); replacement
/// is an upsert so concurrent readers never observe a gap between deleting
/// the old cart and inserting the new one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCartRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Upserts the user's cart: line items and total are replaced, any
    /// previously applied discount is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace(&self, new_cart: NewCart) -> Result<Cart, AppError>;

    /// Finds the user's current cart with its line items.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Cart))` if the user has a cart
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user(&self, user_id: i64) -> Result<Option<Cart>, AppError>;

    /// Deletes the user's cart, returning the deleted document, or `None`
    /// if there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_user(&self, user_id: i64) -> Result<Option<Cart>, AppError>;

    /// Persists the discounted total computed by a coupon application.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_discounted_total(&self, user_id: i64, total: f64) -> Result<(), AppError>;
}
