//! DTOs for the wishlist endpoints.

use serde::{Deserialize, Serialize};

use crate::api::dto::cart::ProductSummary;
use crate::application::services::WishlistDetails;

/// Request adding a product to the wishlist.
#[derive(Debug, Deserialize)]
pub struct AddToWishlistRequest {
    #[serde(rename = "productId")]
    pub product_id: i64,
}

/// The user document with the wishlist expanded, as returned by
/// `GET /api/user/wishlist`.
#[derive(Debug, Serialize)]
pub struct WishlistResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub email: String,
    pub wishlist: Vec<ProductSummary>,
}

impl From<WishlistDetails> for WishlistResponse {
    fn from(details: WishlistDetails) -> Self {
        Self {
            id: details.user.id,
            email: details.user.email,
            wishlist: details
                .products
                .iter()
                .map(ProductSummary::from)
                .collect(),
        }
    }
}
