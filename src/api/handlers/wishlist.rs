//! Handlers for the wishlist endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::common::OkResponse;
use crate::api::dto::wishlist::{AddToWishlistRequest, WishlistResponse};
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a product to the authenticated user's wishlist.
///
/// # Endpoint
///
/// `POST /api/user/wishlist`
///
/// # Request Body
///
/// ```json
/// {"productId": 42}
/// ```
///
/// Adding a product already on the wishlist is a no-op.
pub async fn add_to_wishlist_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<AddToWishlistRequest>,
) -> Result<Json<OkResponse>, AppError> {
    state
        .wishlist_service
        .add(&current.email, payload.product_id)
        .await?;

    Ok(Json(OkResponse::new()))
}

/// Returns the user document with the wishlist expanded to products.
///
/// # Endpoint
///
/// `GET /api/user/wishlist`
pub async fn get_wishlist_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<WishlistResponse>, AppError> {
    let details = state.wishlist_service.list(&current.email).await?;

    Ok(Json(details.into()))
}

/// Removes a product from the authenticated user's wishlist.
///
/// # Endpoint
///
/// `DELETE /api/user/wishlist/{product_id}`
///
/// Removing a product that is not on the wishlist is a no-op.
pub async fn remove_from_wishlist_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(product_id): Path<i64>,
) -> Result<Json<OkResponse>, AppError> {
    state
        .wishlist_service
        .remove(&current.email, product_id)
        .await?;

    Ok(Json(OkResponse::new()))
}
