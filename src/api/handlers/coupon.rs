//! Handler for applying a coupon to the cart.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::coupon::{ApplyCouponRequest, ApplyCouponResponse};
use crate::api::middleware::CurrentUser;
use crate::application::services::CouponOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Applies a coupon code to the authenticated user's cart.
///
/// # Endpoint
///
/// `POST /api/user/cart/coupon`
///
/// # Request Body
///
/// ```json
/// {"coupon": "SUMMER20"}
/// ```
///
/// # Response
///
/// A valid coupon answers with the discounted total as a bare number. An
/// unknown code answers `{"err": "Invalid coupon"}` — still under a 200
/// status, which is what the storefront clients branch on.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed code, 404 when the user has no
/// cart to discount.
pub async fn apply_coupon_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<ApplyCouponRequest>,
) -> Result<Json<ApplyCouponResponse>, AppError> {
    payload.validate()?;

    let response = match state
        .coupon_service
        .apply_coupon(&current.email, &payload.coupon)
        .await?
    {
        CouponOutcome::Applied(total) => ApplyCouponResponse::Applied(total),
        CouponOutcome::Invalid => ApplyCouponResponse::invalid(),
    };

    Ok(Json(response))
}
