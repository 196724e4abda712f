//! Wishlist maintenance.

use std::sync::Arc;

use crate::application::identity::resolve_user;
use crate::domain::entities::{Product, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// A user together with their expanded wishlist.
#[derive(Debug, Clone)]
pub struct WishlistDetails {
    pub user: User,
    pub products: Vec<Product>,
}

/// Service maintaining the wishlist set on the user record.
pub struct WishlistService {
    users: Arc<dyn UserRepository>,
}

impl WishlistService {
    /// Creates a new wishlist service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Adds a product reference to the wishlist. Set semantics: adding a
    /// duplicate is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn add(&self, email: &str, product_id: i64) -> Result<(), AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        self.users.add_to_wishlist(user.id, product_id).await
    }

    /// Returns the user with their wishlist expanded to products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn list(&self, email: &str) -> Result<WishlistDetails, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        let products = self.users.wishlist_products(user.id).await?;
        Ok(WishlistDetails { user, products })
    }

    /// Removes a product reference. Removing an absent id is a no-op, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn remove(&self, email: &str, product_id: i64) -> Result<(), AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        self.users.remove_from_wishlist(user.id, product_id).await
    }
}
