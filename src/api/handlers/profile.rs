//! Handlers for address and profile updates.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::address::SaveAddressRequest;
use crate::api::dto::common::OkResponse;
use crate::api::dto::profile::{UpdateProfileRequest, UserResponse};
use crate::api::middleware::CurrentUser;
use crate::domain::entities::Address;
use crate::error::AppError;
use crate::state::AppState;

/// Saves the authenticated user's shipping address, overwriting any
/// previous one.
///
/// # Endpoint
///
/// `POST /api/user/address`
///
/// # Errors
///
/// Returns 400 Bad Request when the address shape fails validation.
pub async fn save_address_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<SaveAddressRequest>,
) -> Result<Json<OkResponse>, AppError> {
    payload.validate()?;

    state
        .profile_service
        .save_address(&current.email, payload.address.into())
        .await?;

    Ok(Json(OkResponse::new()))
}

/// Returns the stored shipping address, or `null` if never set.
///
/// # Endpoint
///
/// `GET /api/user/address`
pub async fn get_address_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Option<Address>>, AppError> {
    let address = state.profile_service.get_address(&current.email).await?;

    Ok(Json(address))
}

/// Updates the authenticated user's display name and returns the updated
/// user document.
///
/// # Endpoint
///
/// `PUT /api/user/profile`
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .profile_service
        .update_details(&current.email, &payload.name)
        .await?;

    Ok(Json(user.into()))
}
