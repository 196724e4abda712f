//! Order entity, payment intents, and order status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::LineItem;

/// Payment record attached to an order.
///
/// Capability-typed: an order either carries the gateway's own confirmation
/// blob verbatim, or a synthesized cash-on-delivery record. Serialized
/// untagged so the stored and wire shape of a paid order is exactly the
/// confirmation the gateway returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentIntent {
    /// Bookkeeping record for a deferred (cash-on-delivery) payment.
    CashOnDelivery {
        id: Uuid,
        /// Amount in minor currency units (paise).
        amount: i64,
        currency: String,
        status: String,
        created_at: DateTime<Utc>,
        receipt: Uuid,
    },
    /// Opaque confirmation returned by the online payment gateway.
    Paid(serde_json::Value),
}

impl PaymentIntent {
    /// Synthesizes a cash-on-delivery payment record for the given amount
    /// in minor currency units.
    pub fn cash_on_delivery(amount: i64) -> Self {
        Self::CashOnDelivery {
            id: Uuid::new_v4(),
            amount,
            currency: "INR".to_string(),
            status: "Cash On Delivery".to_string(),
            created_at: Utc::now(),
            receipt: Uuid::new_v4(),
        }
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Not Processed")]
    NotProcessed,
    #[serde(rename = "Cash On Delivery")]
    CashOnDelivery,
    #[serde(rename = "Processing")]
    Processing,
    #[serde(rename = "Dispatched")]
    Dispatched,
    #[serde(rename = "Cancelled")]
    Cancelled,
    #[serde(rename = "Completed")]
    Completed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotProcessed => "Not Processed",
            Self::CashOnDelivery => "Cash On Delivery",
            Self::Processing => "Processing",
            Self::Dispatched => "Dispatched",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Not Processed" => Some(Self::NotProcessed),
            "Cash On Delivery" => Some(Self::CashOnDelivery),
            "Processing" => Some(Self::Processing),
            "Dispatched" => Some(Self::Dispatched),
            "Cancelled" => Some(Self::Cancelled),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// An immutable record of a checkout.
///
/// `lines` is a snapshot of the cart at order-creation time; nothing in
/// this service mutates an order after it is persisted.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub lines: Vec<LineItem>,
    pub payment: PaymentIntent,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Input data for persisting a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub lines: Vec<LineItem>,
    pub payment: PaymentIntent,
    pub status: OrderStatus,
}
