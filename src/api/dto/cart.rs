//! DTOs for the cart endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CartDetails;
use crate::domain::entities::{Cart, LineItem, Product};

/// Request replacing the user's cart with a new set of selections.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceCartRequest {
    #[validate(nested)]
    pub cart: Vec<CartItemDto>,
}

/// One submitted product selection.
///
/// Field names follow the storefront clients' wire format (`_id` for the
/// product reference).
#[derive(Debug, Deserialize, Validate)]
pub struct CartItemDto {
    #[serde(rename = "_id")]
    pub product_id: i64,

    /// Quantity ordered; must be positive.
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: i32,

    #[validate(length(max = 64))]
    pub color: Option<String>,

    #[validate(length(max = 64))]
    pub size: Option<String>,
}

/// Response for `GET /api/user/cart`.
///
/// Untagged: either the populated cart or the explicit empty signal.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CartResponse {
    Cart(CartContents),
    Empty {
        #[serde(rename = "isEmpty")]
        is_empty: bool,
    },
}

impl CartResponse {
    pub fn empty() -> Self {
        Self::Empty { is_empty: true }
    }
}

/// The populated cart with product references expanded.
#[derive(Debug, Serialize)]
pub struct CartContents {
    pub products: Vec<CartLineView>,
    #[serde(rename = "cartTotal")]
    pub cart_total: f64,
    #[serde(rename = "totalAfterDiscount", skip_serializing_if = "Option::is_none")]
    pub total_after_discount: Option<f64>,
}

/// One cart line with its catalog record.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    /// `None` when the product has left the catalog since the cart was
    /// submitted; the price snapshot below still stands.
    pub product: Option<ProductSummary>,
    pub count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub price: f64,
}

/// Catalog projection embedded in cart, wishlist, and order responses.
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            brand: product.brand.clone(),
        }
    }
}

impl From<CartDetails> for CartContents {
    fn from(details: CartDetails) -> Self {
        let products = details
            .cart
            .lines
            .iter()
            .map(|line| {
                let product = details
                    .products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(ProductSummary::from);
                CartLineView {
                    product,
                    count: line.count,
                    color: line.color.clone(),
                    size: line.size.clone(),
                    price: line.price,
                }
            })
            .collect();

        Self {
            products,
            cart_total: details.cart.cart_total,
            total_after_discount: details.cart.total_after_discount,
        }
    }
}

/// The raw (unexpanded) cart document returned by `DELETE /api/user/cart`.
#[derive(Debug, Serialize)]
pub struct DeletedCartView {
    #[serde(rename = "_id")]
    pub id: i64,
    pub products: Vec<DeletedCartLine>,
    #[serde(rename = "cartTotal")]
    pub cart_total: f64,
    #[serde(rename = "totalAfterDiscount", skip_serializing_if = "Option::is_none")]
    pub total_after_discount: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DeletedCartLine {
    pub product: i64,
    pub count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub price: f64,
}

impl From<&LineItem> for DeletedCartLine {
    fn from(line: &LineItem) -> Self {
        Self {
            product: line.product_id,
            count: line.count,
            color: line.color.clone(),
            size: line.size.clone(),
            price: line.price,
        }
    }
}

impl From<Cart> for DeletedCartView {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            products: cart.lines.iter().map(DeletedCartLine::from).collect(),
            cart_total: cart.cart_total,
            total_after_discount: cart.total_after_discount,
        }
    }
}
