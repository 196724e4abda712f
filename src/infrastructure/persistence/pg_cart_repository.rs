//! PostgreSQL implementation of the cart repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Cart, LineItem, NewCart};
use crate::domain::repositories::CartRepository;
use crate::error::AppError;

/// PostgreSQL repository enforcing the single-cart-per-user invariant.
///
/// `carts.user_id` is UNIQUE; replacement runs as one transaction around an
/// `ON CONFLICT (user_id) DO UPDATE` upsert plus a line-item rewrite, so a
/// concurrent reader sees either the old cart or the new one, never none.
pub struct PgCartRepository {
    pool: Arc<PgPool>,
}

impl PgCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_lines(&self, cart_id: i64) -> Result<Vec<LineItem>, AppError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r#"
            SELECT product_id, count, color, size, price
            FROM cart_items
            WHERE cart_id = $1
            ORDER BY position
            "#,
        )
        .bind(cart_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(LineItem::from).collect())
    }
}

#[derive(sqlx::FromRow)]
struct CartRow {
    id: i64,
    user_id: i64,
    cart_total: f64,
    total_after_discount: Option<f64>,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct CartItemRow {
    product_id: i64,
    count: i32,
    color: Option<String>,
    size: Option<String>,
    price: f64,
}

impl From<CartItemRow> for LineItem {
    fn from(row: CartItemRow) -> Self {
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
impl CartRepository for PgCartRepository {
    async fn replace(&self, new_cart: NewCart) -> Result<Cart, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CartRow>(
            r#"
            INSERT INTO carts (user_id, cart_total, total_after_discount)
            VALUES ($1, $2, NULL)
            ON CONFLICT (user_id) DO UPDATE
            SET cart_total = EXCLUDED.cart_total,
                total_after_discount = NULL,
                updated_at = now()
            RETURNING id, user_id, cart_total, total_after_discount, created_at
            "#,
        )
        .bind(new_cart.user_id)
        .bind(new_cart.cart_total)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        if !new_cart.lines.is_empty() {
            let product_ids: Vec<i64> = new_cart.lines.iter().map(|l| l.product_id).collect();
            let counts: Vec<i32> = new_cart.lines.iter().map(|l| l.count).collect();
            let colors: Vec<Option<String>> =
                new_cart.lines.iter().map(|l| l.color.clone()).collect();
            let sizes: Vec<Option<String>> =
                new_cart.lines.iter().map(|l| l.size.clone()).collect();
            let prices: Vec<f64> = new_cart.lines.iter().map(|l| l.price).collect();
            let positions: Vec<i32> = (0..new_cart.lines.len() as i32).collect();

            sqlx::query(
                r#"
                INSERT INTO cart_items (cart_id, product_id, count, color, size, price, position)
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

        Ok(Cart {
            id: row.id,
            user_id: row.user_id,
            lines: new_cart.lines,
            cart_total: row.cart_total,
            total_after_discount: row.total_after_discount,
            created_at: row.created_at,
        })
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Cart>, AppError> {
        let row = sqlx::query_as::<_, CartRow>(
            r#"
            SELECT id, user_id, cart_total, total_after_discount, created_at
            FROM carts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let lines = self.load_lines(row.id).await?;

        Ok(Some(Cart {
            id: row.id,
            user_id: row.user_id,
            lines,
            cart_total: row.cart_total,
            total_after_discount: row.total_after_discount,
            created_at: row.created_at,
        }))
    }

    async fn delete_by_user(&self, user_id: i64) -> Result<Option<Cart>, AppError> {
        let cart = self.find_by_user(user_id).await?;

        if cart.is_some() {
            // cart_items go with it via ON DELETE CASCADE
            sqlx::query("DELETE FROM carts WHERE user_id = $1")
                .bind(user_id)
                .execute(self.pool.as_ref())
                .await?;
        }

        Ok(cart)
    }

    async fn set_discounted_total(&self, user_id: i64, total: f64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE carts
            SET total_after_discount = $2, updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(total)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
