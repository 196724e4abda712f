//! Cart replacement, retrieval, and clearing.

use std::sync::Arc;

use serde_json::json;

use crate::application::identity::resolve_user;
use crate::domain::entities::{Cart, LineItem, NewCart, Product};
use crate::domain::repositories::{CartRepository, ProductRepository, UserRepository};
use crate::error::AppError;

/// A client-submitted product selection, already validated at the API
/// boundary.
#[derive(Debug, Clone)]
pub struct CartSelection {
    pub product_id: i64,
    pub count: i32,
    pub color: Option<String>,
    pub size: Option<String>,
}

/// A cart together with the catalog records its line items reference.
#[derive(Debug, Clone)]
pub struct CartDetails {
    pub cart: Cart,
    pub products: Vec<Product>,
}

/// Service maintaining the single active cart per user.
///
/// Line-item prices are snapshotted from the catalog at submission time;
/// nothing downstream re-reads them.
pub struct CartService {
    carts: Arc<dyn CartRepository>,
    products: Arc<dyn ProductRepository>,
    users: Arc<dyn UserRepository>,
}

impl CartService {
    /// Creates a new cart service.
    pub fn new(
        carts: Arc<dyn CartRepository>,
        products: Arc<dyn ProductRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            carts,
            products,
            users,
        }
    }

    /// Replaces the user's cart with the submitted selections.
    ///
    /// Each selection is priced from the current catalog; the cart total is
    /// the sum of `price × count` over all lines. The previous cart and any
    /// applied discount are superseded by the upsert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record
    /// or any selected product no longer exists. A missing product fails
    /// the whole submission; it is never silently skipped.
    pub async fn replace_cart(
        &self,
        email: &str,
        selections: Vec<CartSelection>,
    ) -> Result<Cart, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;

        let mut lines = Vec::with_capacity(selections.len());
        for selection in selections {
            let product = self
                .products
                .find_by_id(selection.product_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(
                        "Product not found",
                        json!({ "productId": selection.product_id }),
                    )
                })?;

            lines.push(LineItem {
                product_id: selection.product_id,
                count: selection.count,
                color: selection.color,
                size: selection.size,
                price: product.price,
            });
        }

        let cart_total = lines.iter().map(LineItem::line_total).sum();

        self.carts
            .replace(NewCart {
                user_id: user.id,
                lines,
                cart_total,
            })
            .await
    }

    /// Returns the user's current cart with product references expanded,
    /// or `None` when no cart exists (an empty cart is not an error).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn get_cart(&self, email: &str) -> Result<Option<CartDetails>, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;

        let Some(cart) = self.carts.find_by_user(user.id).await? else {
            return Ok(None);
        };

        let ids: Vec<i64> = cart.lines.iter().map(|line| line.product_id).collect();
        let products = self.products.find_by_ids(&ids).await?;

        Ok(Some(CartDetails { cart, products }))
    }

    /// Deletes the user's cart, returning the deleted document if one
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn clear_cart(&self, email: &str) -> Result<Option<Cart>, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        self.carts.delete_by_user(user.id).await
    }
}
