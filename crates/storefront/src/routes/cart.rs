//! Cart route handlers.
//!
//! Carts are keyed by the user ID in the path and created on first use.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use cartline_core::{ProductId, UserId};

use crate::error::{ErrorResponse, Result};
use crate::extract::JsonBody;
use crate::models::{Cart, DeliveryAddress, DeliveryInfo, Product};
use crate::services::CheckoutService;
use crate::state::AppState;
use crate::store::CartRepository;

/// Get the user's cart, creating an empty one on first access.
#[utoipa::path(
    get,
    path = "/cart/{user_id}",
    tag = "cart",
    params(("user_id" = String, Path, description = "User identifier")),
    responses((status = 200, description = "The user's cart", body = Cart))
)]
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Json<Cart> {
    Json(CartRepository::new(state.store()).get_or_create(&user_id).await)
}

/// Add a product to the user's cart.
///
/// A product ID is generated when the body omits it.
#[utoipa::path(
    post,
    path = "/cart/{user_id}/items",
    tag = "cart",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = Product,
    responses(
        (status = 200, description = "Updated cart", body = Cart),
        (status = 400, description = "Cart total out of range", body = ErrorResponse),
    )
)]
#[instrument(skip(state, product), fields(product_id = %product.id))]
pub async fn add_item(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    JsonBody(product): JsonBody<Product>,
) -> Result<Json<Cart>> {
    let cart = CartRepository::new(state.store())
        .add_product(&user_id, product)
        .await?;
    tracing::info!(items = cart.items().len(), total = %cart.total(), "Product added to cart");
    Ok(Json(cart))
}

/// Remove a product from the user's cart.
#[utoipa::path(
    delete,
    path = "/cart/{user_id}/items/{product_id}",
    tag = "cart",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("product_id" = String, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Updated cart", body = Cart),
        (status = 400, description = "Cart total out of range", body = ErrorResponse),
        (status = 404, description = "Cart or product not found", body = ErrorResponse),
    )
)]
#[instrument(skip(state))]
pub async fn remove_item(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(UserId, ProductId)>,
) -> Result<Json<Cart>> {
    let cart = CartRepository::new(state.store())
        .remove_product(&user_id, &product_id)
        .await?;
    tracing::info!(items = cart.items().len(), total = %cart.total(), "Product removed from cart");
    Ok(Json(cart))
}

/// Check out the user's cart to the given address.
///
/// Records a delivery in the `Processing` state and empties the cart.
#[utoipa::path(
    post,
    path = "/cart/{user_id}/checkout",
    tag = "cart",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = DeliveryAddress,
    responses(
        (status = 200, description = "Delivery created", body = DeliveryInfo),
        (status = 400, description = "Cart is empty or cost out of range", body = ErrorResponse),
    )
)]
#[instrument(skip(state, address))]
pub async fn checkout(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    JsonBody(address): JsonBody<DeliveryAddress>,
) -> Result<Json<DeliveryInfo>> {
    let info = CheckoutService::new(state.store(), &state.config().delivery)
        .checkout(user_id, address)
        .await?;
    Ok(Json(info))
}
