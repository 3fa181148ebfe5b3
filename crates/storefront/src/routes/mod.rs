//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                              - Health check
//! GET    /openapi.json                        - OpenAPI document
//!
//! # Cart
//! GET    /cart/{user_id}                      - Get (or create) cart
//! POST   /cart/{user_id}/items                - Add product
//! DELETE /cart/{user_id}/items/{product_id}   - Remove product
//! POST   /cart/{user_id}/checkout             - Check out to an address
//!
//! # Delivery
//! POST   /delivery/calculate                  - Quote delivery cost
//! GET    /delivery/info/{order_id}            - Delivery details
//! POST   /delivery/availability               - Regional availability
//!
//! # Addresses
//! GET    /user/{user_id}/addresses            - List saved addresses
//! POST   /user/{user_id}/addresses            - Save an address
//! ```
//!
//! Unmatched paths fall through to [`not_found`].

pub mod addresses;
pub mod cart;
pub mod delivery;
pub mod health;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::error::AppError;
use crate::openapi;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/{user_id}", get(cart::show))
        .route("/{user_id}/items", post(cart::add_item))
        .route("/{user_id}/items/{product_id}", delete(cart::remove_item))
        .route("/{user_id}/checkout", post(cart::checkout))
}

/// Create the delivery routes router.
pub fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(delivery::calculate))
        .route("/info/{order_id}", get(delivery::info))
        .route("/availability", post(delivery::availability))
}

/// Create the user address routes router.
pub fn address_routes() -> Router<AppState> {
    Router::new().route(
        "/{user_id}/addresses",
        get(addresses::index).post(addresses::create),
    )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(openapi::openapi_json))
        .nest("/cart", cart_routes())
        .nest("/delivery", delivery_routes())
        .nest("/user", address_routes())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
