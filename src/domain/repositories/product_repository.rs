//! Repository trait for catalog product access.

use crate::domain::entities::{Product, StockAdjustment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for catalog products.
///
/// The catalog is externally managed; this service only reads products and
/// applies stock adjustments during order placement.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a product by id, brand expanded.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Fetches all products matching the given ids. Missing ids are simply
    /// absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, AppError>;

    /// Applies a batched stock adjustment as a single statement: for each
    /// entry, `quantity -= count` and `sold += count`.
    ///
    /// Returns the number of product rows updated. Stock is not reserved or
    /// locked; concurrent checkouts over the same product can oversell.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn adjust_stock(&self, adjustments: &[StockAdjustment]) -> Result<u64, AppError>;
}
