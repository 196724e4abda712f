//! Repository trait for coupon access.

use crate::domain::entities::{Coupon, NewCoupon};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for discount coupons.
///
/// Request handlers only ever read coupons; creation and removal are
/// operator actions exposed through the admin CLI.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCouponRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Finds a coupon by exact name match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Coupon>, AppError>;

    /// Creates a coupon (admin CLI).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_coupon: NewCoupon) -> Result<Coupon, AppError>;

    /// Lists all coupons (admin CLI).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Coupon>, AppError>;

    /// Deletes a coupon by name (admin CLI). Returns `true` if a row was
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_name(&self, name: &str) -> Result<bool, AppError>;
}
