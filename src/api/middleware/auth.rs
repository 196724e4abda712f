//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// The authenticated principal, injected into request extensions for
/// handlers to consume.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
}

/// Authenticates requests using Bearer tokens from the Authorization
/// header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the token from the `Authorization` header
/// 2. Validate its HMAC hash against the token store
/// 3. Resolve the principal email the token was issued for
/// 4. Insert [`CurrentUser`] into request extensions
/// 5. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The Authorization header is missing
/// - The token format is invalid
/// - The token is unknown or revoked
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let email = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser { email });

    Ok(next.run(req).await)
}
