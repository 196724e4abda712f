//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Product, StockAdjustment};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// PostgreSQL repository for catalog reads and stock adjustments.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    price: f64,
    quantity: i32,
    sold: i32,
    brand: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(
            row.id,
            row.title,
            row.price,
            row.quantity,
            row.sold,
            row.brand,
        )
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.title, p.price, p.quantity, p.sold, b.name AS brand
            FROM products p
            LEFT JOIN brands b ON b.id = p.brand_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.title, p.price, p.quantity, p.sold, b.name AS brand
            FROM products p
            LEFT JOIN brands b ON b.id = p.brand_id
            WHERE p.id = ANY($1)
            ORDER BY p.id
            "#,
        )
        .bind(ids.to_vec())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn adjust_stock(&self, adjustments: &[StockAdjustment]) -> Result<u64, AppError> {
        if adjustments.is_empty() {
            return Ok(0);
        }

        let product_ids: Vec<i64> = adjustments.iter().map(|a| a.product_id).collect();
        let counts: Vec<i32> = adjustments.iter().map(|a| a.count).collect();

        // One statement for the whole order, the closest the store offers
        // to an atomic bulk counter update.
        let result = sqlx::query(
            r#"
            UPDATE products AS p
            SET quantity = p.quantity - a.count,
                sold = p.sold + a.count
            FROM (
                SELECT unnest($1::bigint[]) AS product_id,
                       unnest($2::int[]) AS count
            ) AS a
            WHERE p.id = a.product_id
            "#,
        )
        .bind(product_ids)
        .bind(counts)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}
