//! PostgreSQL implementation of the order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use sqlx::types::Json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{LineItem, NewOrder, Order, OrderStatus, PaymentIntent};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// PostgreSQL repository for immutable orders.
///
/// The payment intent is stored as JSONB in exactly its wire shape; line
/// items live in `order_items`, written once in the creating transaction.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    payment_intent: Json<PaymentIntent>,
    order_status: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, lines: Vec<LineItem>) -> Result<Order, AppError> {
        let status = OrderStatus::parse(&self.order_status).ok_or_else(|| {
            AppError::internal(
                "Unknown order status",
                json!({ "orderId": self.id, "status": self.order_status }),
            )
        })?;

        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            lines,
            payment: self.payment_intent.0,
            status,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    order_id: i64,
    product_id: i64,
    count: i32,
    color: Option<String>,
    size: Option<String>,
    price: f64,
}

impl From<OrderItemRow> for LineItem {
    fn from(row: OrderItemRow) -> Self {
        LineItem {
            product_id: row.product_id,
            count: row.count,
            color: row.color,
            size: row.size,
            price: row.price,
        }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (user_id, payment_intent, order_status)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, payment_intent, order_status, created_at
            "#,
        )
        .bind(new_order.user_id)
        .bind(Json(new_order.payment.clone()))
        .bind(new_order.status.as_str())
        .fetch_one(&mut *tx)
        .await?;

        if !new_order.lines.is_empty() {
            let product_ids: Vec<i64> = new_order.lines.iter().map(|l| l.product_id).collect();
            let counts: Vec<i32> = new_order.lines.iter().map(|l| l.count).collect();
            let colors: Vec<Option<String>> =
                new_order.lines.iter().map(|l| l.color.clone()).collect();
            let sizes: Vec<Option<String>> =
                new_order.lines.iter().map(|l| l.size.clone()).collect();
            let prices: Vec<f64> = new_order.lines.iter().map(|l| l.price).collect();
            let positions: Vec<i32> = (0..new_order.lines.len() as i32).collect();

            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, count, color, size, price, position)
                SELECT $1, u.product_id, u.count, u.color, u.size, u.price, u.position
                FROM unnest($2::bigint[], $3::int[], $4::text[], $5::text[], $6::float8[], $7::int[])
                    AS u(product_id, count, color, size, price, position)
                "#,
            )
            .bind(row.id)
            .bind(product_ids)
            .bind(counts)
            .bind(colors)
            .bind(sizes)
            .bind(prices)
            .bind(positions)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        row.into_order(new_order.lines)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, payment_intent, order_status, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let order_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT order_id, product_id, count, color, size, price
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY order_id, position
            "#,
        )
        .bind(order_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut lines_by_order: HashMap<i64, Vec<LineItem>> = HashMap::new();
        for item in item_rows {
            lines_by_order
                .entry(item.order_id)
                .or_default()
                .push(LineItem::from(item));
        }

        rows.into_iter()
            .map(|row| {
                let lines = lines_by_order.remove(&row.id).unwrap_or_default();
                row.into_order(lines)
            })
            .collect()
    }
}
