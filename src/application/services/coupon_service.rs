//! Coupon validation and cart discounting.

use std::sync::Arc;

use serde_json::json;

use crate::application::identity::resolve_user;
use crate::domain::entities::round2;
use crate::domain::repositories::{CartRepository, CouponRepository, UserRepository};
use crate::error::AppError;

/// Outcome of a coupon application.
///
/// An unknown coupon code is not a failure of the request: the handler
/// reports it as a 200-status `{"err": ...}` payload, matching what
/// storefront clients already expect. The distinction therefore lives in
/// the return value rather than in `AppError`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CouponOutcome {
    /// Discount applied; carries the new total.
    Applied(f64),
    /// No coupon with the submitted name exists.
    Invalid,
}

/// Service applying percentage coupons to the user's cart.
pub struct CouponService {
    coupons: Arc<dyn CouponRepository>,
    carts: Arc<dyn CartRepository>,
    users: Arc<dyn UserRepository>,
}

impl CouponService {
    /// Creates a new coupon service.
    pub fn new(
        coupons: Arc<dyn CouponRepository>,
        carts: Arc<dyn CartRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            coupons,
            carts,
            users,
        }
    }

    /// Applies the named coupon to the user's cart.
    ///
    /// The coupon is looked up before any user or cart access, so an
    /// invalid code touches nothing. The discounted total is computed from
    /// the cart's **stored** total — never recomputed from the catalog —
    /// rounded to two decimals, and persisted onto the cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record
    /// or no cart to discount. An unknown coupon is reported through
    /// [`CouponOutcome::Invalid`], not as an error.
    pub async fn apply_coupon(&self, email: &str, code: &str) -> Result<CouponOutcome, AppError> {
        let Some(coupon) = self.coupons.find_by_name(code).await? else {
            return Ok(CouponOutcome::Invalid);
        };

        let user = resolve_user(self.users.as_ref(), email).await?;

        let cart = self
            .carts
            .find_by_user(user.id)
            .await?
            .ok_or_else(|| AppError::not_found("Cart not found", json!({ "userId": user.id })))?;

        let discounted = round2(cart.cart_total - cart.cart_total * coupon.discount / 100.0);

        self.carts.set_discounted_total(user.id, discounted).await?;

        tracing::info!(
            coupon = %coupon.name,
            cart_total = cart.cart_total,
            discounted,
            "coupon applied"
        );

        Ok(CouponOutcome::Applied(discounted))
    }
}
