//! Delivery route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use cartline_core::OrderId;

use crate::error::{ErrorResponse, Result};
use crate::extract::JsonBody;
use crate::models::{
    AvailabilityCheckRequest, AvailabilityCheckResponse, DeliveryCostRequest,
    DeliveryCostResponse, DeliveryInfo,
};
use crate::services::DeliveryService;
use crate::state::AppState;
use crate::store::DeliveryRepository;

/// Quote the delivery cost to an address.
#[utoipa::path(
    post,
    path = "/delivery/calculate",
    tag = "delivery",
    request_body = DeliveryCostRequest,
    responses((status = 200, description = "Delivery cost", body = DeliveryCostResponse))
)]
#[instrument(skip(state, request), fields(country = %request.address.country))]
pub async fn calculate(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DeliveryCostRequest>,
) -> Json<DeliveryCostResponse> {
    let cost = DeliveryService::new(&state.config().delivery).quote(&request.address);
    Json(DeliveryCostResponse { cost })
}

/// Look up the delivery recorded for an order.
#[utoipa::path(
    get,
    path = "/delivery/info/{order_id}",
    tag = "delivery",
    params(("order_id" = String, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Delivery details", body = DeliveryInfo),
        (status = 404, description = "Unknown order", body = ErrorResponse),
    )
)]
#[instrument(skip(state))]
pub async fn info(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Json<DeliveryInfo>> {
    let info = DeliveryRepository::new(state.store()).get(&order_id).await?;
    Ok(Json(info))
}

/// Check whether a product can be delivered to a region.
#[utoipa::path(
    post,
    path = "/delivery/availability",
    tag = "delivery",
    request_body = AvailabilityCheckRequest,
    responses((status = 200, description = "Availability verdict", body = AvailabilityCheckResponse))
)]
#[instrument(skip(state))]
pub async fn availability(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AvailabilityCheckRequest>,
) -> Json<AvailabilityCheckResponse> {
    Json(
        DeliveryService::new(&state.config().delivery)
            .check_availability(&request.region, &request.product_id),
    )
}
