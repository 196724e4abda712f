//! Order placement and retrieval.

use std::sync::Arc;

use serde_json::json;

use crate::application::identity::resolve_user;
use crate::domain::entities::{
    Cart, NewOrder, Order, OrderStatus, PaymentIntent, Product, StockAdjustment,
};
use crate::domain::repositories::{
    CartRepository, OrderRepository, ProductRepository, UserRepository,
};
use crate::error::AppError;

/// An order together with the catalog records its line items reference.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub products: Vec<Product>,
}

/// Service materializing immutable orders from the current cart.
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    carts: Arc<dyn CartRepository>,
    products: Arc<dyn ProductRepository>,
    users: Arc<dyn UserRepository>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        carts: Arc<dyn CartRepository>,
        products: Arc<dyn ProductRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            orders,
            carts,
            products,
            users,
        }
    }

    /// Creates an order from the user's cart with an externally supplied
    /// payment confirmation, then adjusts inventory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record
    /// or no cart to check out.
    pub async fn create_paid_order(
        &self,
        email: &str,
        confirmation: serde_json::Value,
    ) -> Result<Order, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        let cart = self.require_cart(user.id).await?;

        let order = self
            .orders
            .create(NewOrder {
                user_id: user.id,
                lines: cart.lines,
                payment: PaymentIntent::Paid(confirmation),
                status: OrderStatus::NotProcessed,
            })
            .await?;

        self.apply_stock_adjustments(&order).await?;

        Ok(order)
    }

    /// Creates a cash-on-delivery order from the user's cart.
    ///
    /// `cod` must be explicitly set; the request is rejected otherwise.
    /// The charged amount (in minor currency units) is the cart's
    /// discounted total when `coupon_applied` and a discount exists, else
    /// the plain cart total. A synthetic payment record is generated for
    /// bookkeeping parity with online-paid orders.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `cod` is false.
    /// Returns [`AppError::NotFound`] if the user or their cart is absent.
    pub async fn create_cash_order(
        &self,
        email: &str,
        cod: bool,
        coupon_applied: bool,
    ) -> Result<Order, AppError> {
        if !cod {
            return Err(AppError::bad_request(
                "Create cash order failed",
                json!({ "reason": "cash on delivery was not confirmed" }),
            ));
        }

        let user = resolve_user(self.users.as_ref(), email).await?;
        let cart = self.require_cart(user.id).await?;

        let total = match cart.total_after_discount {
            Some(discounted) if coupon_applied => discounted,
            _ => cart.cart_total,
        };
        let amount = (total * 100.0).round() as i64;

        let order = self
            .orders
            .create(NewOrder {
                user_id: user.id,
                lines: cart.lines,
                payment: PaymentIntent::cash_on_delivery(amount),
                status: OrderStatus::CashOnDelivery,
            })
            .await?;

        self.apply_stock_adjustments(&order).await?;

        Ok(order)
    }

    /// Lists the user's orders with product references expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn list_orders(&self, email: &str) -> Result<Vec<OrderDetails>, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        let orders = self.orders.list_by_user(user.id).await?;

        let mut ids: Vec<i64> = orders
            .iter()
            .flat_map(|order| order.lines.iter().map(|line| line.product_id))
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let products = self.products.find_by_ids(&ids).await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let referenced: Vec<Product> = products
                    .iter()
                    .filter(|product| {
                        order.lines.iter().any(|line| line.product_id == product.id)
                    })
                    .cloned()
                    .collect();
                OrderDetails {
                    order,
                    products: referenced,
                }
            })
            .collect())
    }

    async fn require_cart(&self, user_id: i64) -> Result<Cart, AppError> {
        self.carts
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Cart not found", json!({ "userId": user_id })))
    }

    /// Decrements quantity and increments sold for every ordered line as a
    /// single batched statement.
    ///
    /// The order is already durable when this runs. A failed adjustment
    /// leaves the stock counters lagging the order until reconciled out of
    /// band; the failure is logged and surfaced, never swallowed.
    async fn apply_stock_adjustments(&self, order: &Order) -> Result<(), AppError> {
        let adjustments: Vec<StockAdjustment> = order
            .lines
            .iter()
            .map(|line| StockAdjustment {
                product_id: line.product_id,
                count: line.count,
            })
            .collect();

        match self.products.adjust_stock(&adjustments).await {
            Ok(updated) => {
                tracing::debug!(order_id = order.id, updated, "stock adjusted");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    order_id = order.id,
                    error = %e,
                    "stock adjustment failed after order was persisted"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{LineItem, User};
    use crate::domain::repositories::{
        MockCartRepository, MockOrderRepository, MockProductRepository, MockUserRepository,
    };
    use chrono::Utc;
    use serde_json::json;

    fn test_user() -> User {
        User::new(1, "buyer@example.com".to_string(), "Buyer".to_string(), None)
    }

    fn users_returning_buyer() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(test_user())));
        users
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

    fn cart(lines: Vec<LineItem>, total: f64, discounted: Option<f64>) -> Cart {
        Cart {
            id: 11,
            user_id: 1,
            lines,
            cart_total: total,
            total_after_discount: discounted,
            created_at: Utc::now(),
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

    #[tokio::test]
    async fn test_paid_order_snapshots_cart_and_adjusts_stock() {
        let mut orders = MockOrderRepository::new();
        let mut carts = MockCartRepository::new();
        let mut products = MockProductRepository::new();

        carts.expect_find_by_user().times(1).returning(|_| {
            Ok(Some(cart(
                vec![line(1, 2, 10.0), line(2, 1, 5.0)],
                25.0,
                None,
            )))
        });
        orders
            .expect_create()
            .withf(|new_order| {
                new_order.status == OrderStatus::NotProcessed
                    && new_order.lines.len() == 2
                    && matches!(new_order.payment, PaymentIntent::Paid(_))
            })
            .times(1)
            .returning(|new_order| Ok(persisted(new_order)));
        products
            .expect_adjust_stock()
            .withf(|adjustments| {
                adjustments
                    == [
                        StockAdjustment {
                            product_id: 1,
                            count: 2,
                        },
                        StockAdjustment {
                            product_id: 2,
                            count: 1,
                        },
                    ]
            })
            .times(1)
            .returning(|adjustments| Ok(adjustments.len() as u64));

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(carts),
            Arc::new(products),
            Arc::new(users_returning_buyer()),
        );

        let order = service
            .create_paid_order("buyer@example.com", json!({"razorpay_payment_id": "pay_x"}))
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::NotProcessed);
    }

    #[tokio::test]
    async fn test_paid_order_without_cart_fails() {
        let mut orders = MockOrderRepository::new();
        let mut carts = MockCartRepository::new();
        let products = MockProductRepository::new();

        carts.expect_find_by_user().returning(|_| Ok(None));
        orders.expect_create().times(0);

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(carts),
            Arc::new(products),
            Arc::new(users_returning_buyer()),
        );

        let result = service
            .create_paid_order("buyer@example.com", json!({}))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_cash_order_requires_confirmation_flag() {
        let orders = MockOrderRepository::new();
        let carts = MockCartRepository::new();
        let products = MockProductRepository::new();
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().times(0);

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(carts),
            Arc::new(products),
            Arc::new(users),
        );

        let result = service
            .create_cash_order("buyer@example.com", false, false)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_cash_order_uses_discounted_total_when_coupon_applied() {
        let mut orders = MockOrderRepository::new();
        let mut carts = MockCartRepository::new();
        let mut products = MockProductRepository::new();

        carts
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart(vec![line(1, 2, 12.5)], 25.0, Some(20.0)))));
        orders
            .expect_create()
            .withf(|new_order| {
                new_order.status == OrderStatus::CashOnDelivery
                    && matches!(
                        new_order.payment,
                        PaymentIntent::CashOnDelivery { amount: 2000, .. }
                    )
            })
            .times(1)
            .returning(|new_order| Ok(persisted(new_order)));
        products
            .expect_adjust_stock()
            .times(1)
            .returning(|adjustments| Ok(adjustments.len() as u64));

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(carts),
            Arc::new(products),
            Arc::new(users_returning_buyer()),
        );

        let order = service
            .create_cash_order("buyer@example.com", true, true)
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::CashOnDelivery);
    }

    #[tokio::test]
    async fn test_cash_order_falls_back_to_cart_total() {
        let mut orders = MockOrderRepository::new();
        let mut carts = MockCartRepository::new();
        let mut products = MockProductRepository::new();

        // Coupon requested but no discount stored on the cart.
        carts
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart(vec![line(1, 1, 25.0)], 25.0, None))));
        orders
            .expect_create()
            .withf(|new_order| {
                matches!(
                    new_order.payment,
                    PaymentIntent::CashOnDelivery { amount: 2500, .. }
                )
            })
            .times(1)
            .returning(|new_order| Ok(persisted(new_order)));
        products
            .expect_adjust_stock()
            .times(1)
            .returning(|adjustments| Ok(adjustments.len() as u64));

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(carts),
            Arc::new(products),
            Arc::new(users_returning_buyer()),
        );

        service
            .create_cash_order("buyer@example.com", true, true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_orders_expands_referenced_products() {
        let mut orders = MockOrderRepository::new();
        let carts = MockCartRepository::new();
        let mut products = MockProductRepository::new();

        orders.expect_list_by_user().times(1).returning(|_| {
            Ok(vec![Order {
                id: 77,
                user_id: 1,
                lines: vec![line(1, 2, 10.0)],
                payment: PaymentIntent::cash_on_delivery(2000),
                status: OrderStatus::CashOnDelivery,
                created_at: Utc::now(),
            }])
        });
        products
            .expect_find_by_ids()
            .withf(|ids| ids == [1])
            .times(1)
            .returning(|_| {
                Ok(vec![Product::new(
                    1,
                    "Trail Shoe".to_string(),
                    10.0,
                    8,
                    2,
                    Some("Acme".to_string()),
                )])
            });

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(carts),
            Arc::new(products),
            Arc::new(users_returning_buyer()),
        );

        let details = service.list_orders("buyer@example.com").await.unwrap();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].products.len(), 1);
        assert_eq!(details[0].products[0].brand.as_deref(), Some("Acme"));
    }
}
