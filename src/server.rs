//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection pool, migrations, service graph
//! construction, and the Axum server lifecycle.

use crate::application::services::{
    AuthService, CartService, CouponService, OrderService, ProfileService, WishlistService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgCartRepository, PgCouponRepository, PgOrderRepository, PgProductRepository,
    PgTokenRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Repository and service graph
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let products = Arc::new(PgProductRepository::new(pool.clone()));
    let carts = Arc::new(PgCartRepository::new(pool.clone()));
    let coupons = Arc::new(PgCouponRepository::new(pool.clone()));
    let orders = Arc::new(PgOrderRepository::new(pool.clone()));
    let tokens = Arc::new(PgTokenRepository::new(pool.clone()));

    let state = AppState {
        cart_service: Arc::new(CartService::new(
            carts.clone(),
            products.clone(),
            users.clone(),
        )),
        coupon_service: Arc::new(CouponService::new(
            coupons.clone(),
            carts.clone(),
            users.clone(),
        )),
        order_service: Arc::new(OrderService::new(
            orders,
            carts,
            products,
            users.clone(),
        )),
        wishlist_service: Arc::new(WishlistService::new(users.clone())),
        profile_service: Arc::new(ProfileService::new(users)),
        auth_service: Arc::new(AuthService::new(tokens, config.token_signing_secret.clone())),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
