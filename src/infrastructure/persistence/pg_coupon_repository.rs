//! PostgreSQL implementation of the coupon repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Coupon, NewCoupon};
use crate::domain::repositories::CouponRepository;
use crate::error::AppError;

/// PostgreSQL repository for discount coupons.
pub struct PgCouponRepository {
    pool: Arc<PgPool>,
}

impl PgCouponRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CouponRow {
    id: i64,
    name: String,
    discount: f64,
}

impl From<CouponRow> for Coupon {
    fn from(row: CouponRow) -> Self {
        Coupon {
            id: row.id,
            name: row.name,
            discount: row.discount,
        }
    }
}

#[async_trait]
impl CouponRepository for PgCouponRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Coupon>, AppError> {
        let row =
            sqlx::query_as::<_, CouponRow>("SELECT id, name, discount FROM coupons WHERE name = $1")
                .bind(name)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Coupon::from))
    }

    async fn create(&self, new_coupon: NewCoupon) -> Result<Coupon, AppError> {
        let row = sqlx::query_as::<_, CouponRow>(
            r#"
            INSERT INTO coupons (name, discount)
            VALUES ($1, $2)
            RETURNING id, name, discount
            "#,
        )
        .bind(new_coupon.name)
        .bind(new_coupon.discount)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Coupon::from(row))
    }

    async fn list(&self) -> Result<Vec<Coupon>, AppError> {
        let rows = sqlx::query_as::<_, CouponRow>(
            "SELECT id, name, discount FROM coupons ORDER BY name",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Coupon::from).collect())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM coupons WHERE name = $1")
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
