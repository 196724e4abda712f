//! DTOs for the coupon endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for coupon code validation.
static COUPON_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request applying a coupon code to the current cart.
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyCouponRequest {
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*COUPON_CODE_REGEX"))]
    pub coupon: String,
}

/// Response for coupon application.
///
/// Untagged on purpose: a valid coupon answers with the bare discounted
/// total, an unknown one with `{"err": "Invalid coupon"}` — both under a
/// 200 status, matching what the storefront clients expect.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApplyCouponResponse {
    Applied(f64),
    Invalid { err: &'static str },
}

impl ApplyCouponResponse {
    pub fn invalid() -> Self {
        Self::Invalid {
            err: "Invalid coupon",
        }
    }
}
