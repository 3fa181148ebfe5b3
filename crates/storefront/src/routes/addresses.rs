//! Saved address route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use cartline_core::UserId;

use crate::extract::JsonBody;
use crate::models::DeliveryAddress;
use crate::state::AppState;
use crate::store::AddressRepository;

/// List the user's saved delivery addresses.
#[utoipa::path(
    get,
    path = "/user/{user_id}/addresses",
    tag = "addresses",
    params(("user_id" = String, Path, description = "User identifier")),
    responses((status = 200, description = "Saved addresses", body = Vec<DeliveryAddress>))
)]
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<Vec<DeliveryAddress>> {
    Json(AddressRepository::new(state.store()).list(&user_id).await)
}

/// Save a delivery address for the user.
///
/// An address ID is generated when the body omits it.
#[utoipa::path(
    post,
    path = "/user/{user_id}/addresses",
    tag = "addresses",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = DeliveryAddress,
    responses((status = 200, description = "All saved addresses", body = Vec<DeliveryAddress>))
)]
#[instrument(skip(state, address), fields(address_id = %address.id))]
pub async fn create(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    JsonBody(address): JsonBody<DeliveryAddress>,
) -> Json<Vec<DeliveryAddress>> {
    let addresses = AddressRepository::new(state.store())
        .append(&user_id, address)
        .await;
    tracing::info!(count = addresses.len(), "Address saved");
    Json(addresses)
}
