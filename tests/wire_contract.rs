//! Wire-shape contracts the storefront clients depend on: payment intent
//! passthrough, order status strings, and address field naming.

use serde_json::json;
use storefront_api::prelude::{Address, OrderStatus, PaymentIntent};

#[test]
fn test_paid_intent_is_stored_verbatim() {
    let confirmation = json!({
        "razorpay_payment_id": "pay_29QQoUBi66xm2f",
        "razorpay_order_id": "order_9A33XWu170gUtm",
        "razorpay_signature": "sig"
    });

    let payment = PaymentIntent::Paid(confirmation.clone());

    assert_eq!(serde_json::to_value(&payment).unwrap(), confirmation);
}

#[test]
fn test_cash_intent_carries_inr_minor_units() {
    let payment = PaymentIntent::cash_on_delivery(2546);
    let value = serde_json::to_value(&payment).unwrap();

    assert_eq!(value["amount"], 2546);
    assert_eq!(value["currency"], "INR");
    assert_eq!(value["status"], "Cash On Delivery");
    assert!(value.get("id").is_some());
    assert!(value.get("receipt").is_some());
}

#[test]
fn test_stored_cash_intent_deserializes_to_cash_variant() {
    let value = serde_json::to_value(PaymentIntent::cash_on_delivery(100)).unwrap();
    let back: PaymentIntent = serde_json::from_value(value).unwrap();

    assert!(matches!(back, PaymentIntent::CashOnDelivery { .. }));
}

#[test]
fn test_order_status_round_trip() {
    for status in [
        OrderStatus::NotProcessed,
        OrderStatus::CashOnDelivery,
        OrderStatus::Processing,
        OrderStatus::Dispatched,
        OrderStatus::Cancelled,
        OrderStatus::Completed,
    ] {
        assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
    }
}

#[test]
fn test_address_wire_shape() {
    let address = Address {
        street: "42 Market St".to_string(),
        city: "Pune".to_string(),
        region: None,
        postal_code: "411001".to_string(),
        country: "IN".to_string(),
        phone: None,
    };

    let value = serde_json::to_value(&address).unwrap();

    assert_eq!(value["street"], "42 Market St");
    assert_eq!(value["postal_code"], "411001");
    assert!(value.get("region").is_none());
    assert!(value.get("phone").is_none());
}
