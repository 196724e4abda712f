//! Handlers for the cart endpoints.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::cart::{CartResponse, DeletedCartView, ReplaceCartRequest};
use crate::api::dto::common::OkResponse;
use crate::api::middleware::CurrentUser;
use crate::application::services::CartSelection;
use crate::error::AppError;
use crate::state::AppState;

/// Replaces the authenticated user's cart.
///
/// # Endpoint
///
/// `POST /api/user/cart`
///
/// # Request Body
///
/// ```json
/// {
///   "cart": [
///     {"_id": 1, "count": 2, "color": "black", "size": "M"}
///   ]
/// }
/// ```
///
/// Line prices are snapshotted from the catalog as the cart is stored; the
/// response is a bare `{"ok": true}`.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, 404 if any submitted
/// product no longer exists.
pub async fn replace_cart_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<ReplaceCartRequest>,
) -> Result<Json<OkResponse>, AppError> {
    payload.validate()?;

    let selections = payload
        .cart
        .into_iter()
        .map(|item| CartSelection {
            product_id: item.product_id,
            count: item.count,
            color: item.color,
            size: item.size,
        })
        .collect();

    state
        .cart_service
        .replace_cart(&current.email, selections)
        .await?;

    Ok(Json(OkResponse::new()))
}

/// Returns the authenticated user's cart, products expanded.
///
/// # Endpoint
///
/// `GET /api/user/cart`
///
/// An absent cart is not an error; the response is `{"isEmpty": true}`.
pub async fn get_cart_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<CartResponse>, AppError> {
    let response = match state.cart_service.get_cart(&current.email).await? {
        Some(details) => CartResponse::Cart(details.into()),
        None => CartResponse::empty(),
    };

    Ok(Json(response))
}

/// Deletes the authenticated user's cart.
///
/// # Endpoint
///
/// `DELETE /api/user/cart`
///
/// Responds with the deleted cart document, or `null` when there was
/// nothing to delete.
pub async fn clear_cart_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Option<DeletedCartView>>, AppError> {
    let deleted = state.cart_service.clear_cart(&current.email).await?;

    Ok(Json(deleted.map(DeletedCartView::from)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::testing::MockRepos;
    use crate::domain::entities::{Cart, LineItem, Product, User};
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;

    fn buyer() -> User {
        User::new(1, "buyer@example.com".to_string(), "Buyer".to_string(), None)
    }

    fn server(repos: MockRepos) -> TestServer {
        let app = Router::new()
            .route(
                "/api/user/cart",
                post(replace_cart_handler)
                    .get(get_cart_handler)
                    .delete(clear_cart_handler),
            )
            .layer(Extension(CurrentUser {
                email: "buyer@example.com".to_string(),
            }))
            .with_state(repos.into_state());
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_replace_cart_returns_ok() {
        let mut repos = MockRepos::new();
        repos
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(buyer())));
        repos
            .products
            .expect_find_by_id()
            .returning(|id| Ok(Some(Product::new(id, "P".to_string(), 10.0, 5, 0, None))));
        repos.carts.expect_replace().times(1).returning(|new_cart| {
            Ok(Cart {
                id: 1,
                user_id: new_cart.user_id,
                lines: new_cart.lines,
                cart_total: new_cart.cart_total,
                total_after_discount: None,
                created_at: Utc::now(),
            })
        });

        let server = server(repos);

        let response = server
            .post("/api/user/cart")
            .json(&json!({"cart": [{"_id": 1, "count": 2}]}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_replace_cart_rejects_zero_count() {
        let repos = MockRepos::new();
        let server = server(repos);

        let response = server
            .post("/api/user/cart")
            .json(&json!({"cart": [{"_id": 1, "count": 0}]}))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_get_cart_empty_signal() {
        let mut repos = MockRepos::new();
        repos
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(buyer())));
        repos.carts.expect_find_by_user().returning(|_| Ok(None));

        let server = server(repos);

        let response = server.get("/api/user/cart").await;

        response.assert_status_ok();
        response.assert_json(&json!({"isEmpty": true}));
    }

    #[tokio::test]
    async fn test_get_cart_expands_products() {
        let mut repos = MockRepos::new();
        repos
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(buyer())));
        repos.carts.expect_find_by_user().returning(|_| {
            Ok(Some(Cart {
                id: 9,
                user_id: 1,
                lines: vec![LineItem {
                    product_id: 5,
                    count: 2,
                    color: None,
                    size: None,
                    price: 10.0,
                }],
                cart_total: 20.0,
                total_after_discount: Some(16.0),
                created_at: Utc::now(),
            }))
        });
        repos
            .products
            .expect_find_by_ids()
            .returning(|_| Ok(vec![Product::new(5, "Shoe".to_string(), 10.0, 3, 1, None)]));

        let server = server(repos);

        let response = server.get("/api/user/cart").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["cartTotal"], 20.0);
        assert_eq!(body["totalAfterDiscount"], 16.0);
        assert_eq!(body["products"][0]["product"]["_id"], 5);
        assert_eq!(body["products"][0]["product"]["title"], "Shoe");
        assert_eq!(body["products"][0]["count"], 2);
    }

    #[tokio::test]
    async fn test_clear_cart_returns_null_when_absent() {
        let mut repos = MockRepos::new();
        repos
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(buyer())));
        repos.carts.expect_delete_by_user().returning(|_| Ok(None));

        let server = server(repos);

        let response = server.delete("/api/user/cart").await;

        response.assert_status_ok();
        response.assert_json(&json!(null));
    }
}
