//! DTOs for order creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dto::cart::ProductSummary;
use crate::application::services::OrderDetails;
use crate::domain::entities::PaymentIntent;

/// Request creating an order from an online payment confirmation.
///
/// The confirmation is whatever the payment gateway handed the client; it
/// is stored verbatim and never interpreted.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "razorpayResponse")]
    pub razorpay_response: serde_json::Value,
}

/// Request creating a cash-on-delivery order.
#[derive(Debug, Deserialize)]
pub struct CreateCashOrderRequest {
    /// Explicit confirmation that the buyer chose cash on delivery.
    #[serde(rename = "COD")]
    pub cod: bool,

    /// Whether the buyer asked for their applied coupon to count.
    #[serde(rename = "couponApplied", default)]
    pub coupon_applied: bool,
}

/// One order in the `GET /api/user/orders` response, product references
/// expanded.
#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(rename = "_id")]
    pub id: i64,
    pub products: Vec<OrderLineView>,
    #[serde(rename = "paymentIntent")]
    pub payment_intent: PaymentIntent,
    #[serde(rename = "orderStatus")]
    pub order_status: &'static str,
    #[serde(rename = "orderedBy")]
    pub ordered_by: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// One order line with its catalog record (and brand) expanded.
#[derive(Debug, Serialize)]
pub struct OrderLineView {
    /// `None` when the product has since left the catalog.
    pub product: Option<ProductSummary>,
    pub count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub price: f64,
}

impl From<OrderDetails> for OrderView {
    fn from(details: OrderDetails) -> Self {
        let products = details
            .order
            .lines
            .iter()
            .map(|line| {
                let product = details
                    .products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(ProductSummary::from);
                OrderLineView {
                    product,
                    count: line.count,
                    color: line.color.clone(),
                    size: line.size.clone(),
                    price: line.price,
                }
            })
            .collect();

        Self {
            id: details.order.id,
            products,
            payment_intent: details.order.payment,
            order_status: details.order.status.as_str(),
            ordered_by: details.order.user_id,
            created_at: details.order.created_at,
        }
    }
}
