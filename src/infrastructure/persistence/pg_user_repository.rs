//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{Address, Product, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user records and the wishlist join table.
///
/// The address is stored as a JSONB column; the wishlist is a
/// `(user_id, product_id)` primary-keyed table, which gives set semantics
/// for free.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    address: Option<Json<Address>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.email, row.name, row.address.map(|a| a.0))
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
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, address
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn update_address(&self, user_id: i64, address: &Address) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET address = $2 WHERE id = $1")
            .bind(user_id)
            .bind(Json(address.clone()))
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn update_name(&self, user_id: i64, name: &str) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $2
            WHERE id = $1
            RETURNING id, email, name, address
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(User::from)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "userId": user_id })))
    }

    async fn add_to_wishlist(&self, user_id: i64, product_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO wishlist_items (user_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, product_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn remove_from_wishlist(&self, user_id: i64, product_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn wishlist_products(&self, user_id: i64) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.title, p.price, p.quantity, p.sold, b.name AS brand
            FROM wishlist_items w
            JOIN products p ON p.id = w.product_id
            LEFT JOIN brands b ON b.id = p.brand_id
            WHERE w.user_id = $1
            ORDER BY w.added_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
