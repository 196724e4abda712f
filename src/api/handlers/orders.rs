//! Handlers for order creation and listing.

use axum::{Extension, Json, extract::State};

use crate::api::dto::checkout::{CreateCashOrderRequest, CreateOrderRequest, OrderView};
use crate::api::dto::common::OkResponse;
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an order from the current cart and an online payment
/// confirmation.
///
/// # Endpoint
///
/// `POST /api/user/order`
///
/// # Request Body
///
/// ```json
/// {"razorpayResponse": { ... }}
/// ```
///
/// The confirmation blob is stored verbatim on the order. Inventory is
/// adjusted after the order is persisted.
///
/// # Errors
///
/// Returns 404 when the user has no cart to check out.
pub async fn create_order_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<OkResponse>, AppError> {
    state
        .order_service
        .create_paid_order(&current.email, payload.razorpay_response)
        .await?;

    Ok(Json(OkResponse::new()))
}

/// Creates a cash-on-delivery order from the current cart.
///
/// # Endpoint
///
/// `POST /api/user/cash-order`
///
/// # Request Body
///
/// ```json
/// {"COD": true, "couponApplied": false}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `COD` is not set — deferring payment has
/// to be an explicit choice. Returns 404 when the user has no cart.
pub async fn create_cash_order_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<CreateCashOrderRequest>,
) -> Result<Json<OkResponse>, AppError> {
    state
        .order_service
        .create_cash_order(&current.email, payload.cod, payload.coupon_applied)
        .await?;

    Ok(Json(OkResponse::new()))
}

/// Lists the authenticated user's orders, products and brands expanded.
///
/// # Endpoint
///
/// `GET /api/user/orders`
pub async fn list_orders_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<OrderView>>, AppError> {
    let orders = state.order_service.list_orders(&current.email).await?;

    Ok(Json(orders.into_iter().map(OrderView::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::testing::MockRepos;
    use crate::domain::entities::{
        Cart, LineItem, NewOrder, Order, OrderStatus, PaymentIntent, Product, User,
    };
    use axum::{
        Router,
        routing::{get, post},
    };
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;

    fn buyer() -> User {
        User::new(1, "buyer@example.com".to_string(), "Buyer".to_string(), None)
    }

    fn line(product_id: i64, count: i32, price: f64) -> LineItem {
        LineItem {
            product_id,
            count,
            color: None,
            size: None,
            price,
        }
    }

    fn persisted(new_order: NewOrder) -> Order {
        Order {
            id: 77,
            user_id: new_order.user_id,
            lines: new_order.lines,
            payment: new_order.payment,
            status: new_order.status,
            created_at: Utc::now(),
        }
    }

    fn server(repos: MockRepos) -> TestServer {
        let app = Router::new()
            .route("/api/user/order", post(create_order_handler))
            .route("/api/user/cash-order", post(create_cash_order_handler))
            .route("/api/user/orders", get(list_orders_handler))
            .layer(Extension(CurrentUser {
                email: "buyer@example.com".to_string(),
            }))
            .with_state(repos.into_state());
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_paid_order_returns_ok() {
        let mut repos = MockRepos::new();
        repos
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(buyer())));
        repos.carts.expect_find_by_user().returning(|_| {
            Ok(Some(Cart {
                id: 9,
                user_id: 1,
                lines: vec![line(1, 2, 10.0)],
                cart_total: 20.0,
                total_after_discount: None,
                created_at: Utc::now(),
            }))
        });
        repos
            .orders
            .expect_create()
            .times(1)
            .returning(|new_order| Ok(persisted(new_order)));
        repos
            .products
            .expect_adjust_stock()
            .times(1)
            .returning(|adjustments| Ok(adjustments.len() as u64));

        let server = server(repos);

        let response = server
            .post("/api/user/order")
            .json(&json!({"razorpayResponse": {"razorpay_payment_id": "pay_x"}}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_cash_order_without_flag_is_400() {
        let repos = MockRepos::new();
        let server = server(repos);

        let response = server
            .post("/api/user/cash-order")
            .json(&json!({"COD": false, "couponApplied": false}))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_list_orders_shapes_wire_document() {
        let mut repos = MockRepos::new();
        repos
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(buyer())));
        repos.orders.expect_list_by_user().returning(|_| {
            Ok(vec![Order {
                id: 77,
                user_id: 1,
                lines: vec![line(5, 1, 25.0)],
                payment: PaymentIntent::Paid(json!({"razorpay_payment_id": "pay_x"})),
                status: OrderStatus::NotProcessed,
                created_at: Utc::now(),
            }])
        });
        repos.products.expect_find_by_ids().returning(|_| {
            Ok(vec![Product::new(
                5,
                "Shoe".to_string(),
                25.0,
                4,
                1,
                Some("Acme".to_string()),
            )])
        });

        let server = server(repos);

        let response = server.get("/api/user/orders").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body[0]["_id"], 77);
        assert_eq!(body[0]["orderStatus"], "Not Processed");
        assert_eq!(body[0]["orderedBy"], 1);
        assert_eq!(body[0]["paymentIntent"]["razorpay_payment_id"], "pay_x");
        assert_eq!(body[0]["products"][0]["product"]["brand"], "Acme");
    }
}
