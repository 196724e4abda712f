//! Repository trait for user and wishlist data access.

use crate::domain::entities::{Address, Product, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the user aggregate, including the wishlist.
///
/// The wishlist lives on the user record (set semantics); it is exposed
/// here rather than as its own repository because nothing outside the user
/// aggregate owns it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by their unique email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Overwrites the stored shipping address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_address(&self, user_id: i64, address: &Address) -> Result<(), AppError>;

    /// Overwrites the display name and returns the updated user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user row is gone.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_name(&self, user_id: i64, name: &str) -> Result<User, AppError>;

    /// Adds a product to the wishlist. Adding a present member is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add_to_wishlist(&self, user_id: i64, product_id: i64) -> Result<(), AppError>;

    /// Removes a product from the wishlist. Removing an absent member is a
    /// no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove_from_wishlist(&self, user_id: i64, product_id: i64) -> Result<(), AppError>;

    /// Returns the wishlist expanded to full product records, in insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn wishlist_products(&self, user_id: i64) -> Result<Vec<Product>, AppError>;
}
