//! Delivery records and the request/response bodies of the delivery API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cartline_core::{DeliveryStatus, Money, OrderId, ProductId, UserId};

use super::DeliveryAddress;

/// A delivery created by checkout.
///
/// Holds a copy of the address as it was at checkout time. Never modified
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryInfo {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub delivery_address: DeliveryAddress,
    pub delivery_cost: Money,
    pub status: DeliveryStatus,
}

impl DeliveryInfo {
    /// Create a delivery in the `Processing` state under a fresh order ID.
    #[must_use]
    pub fn new(user_id: UserId, delivery_address: DeliveryAddress, delivery_cost: Money) -> Self {
        Self {
            order_id: OrderId::generate(),
            user_id,
            delivery_address,
            delivery_cost,
            status: DeliveryStatus::Processing,
        }
    }
}

/// Body of `POST /delivery/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryCostRequest {
    pub address: DeliveryAddress,
}

/// Response of `POST /delivery/calculate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryCostResponse {
    pub cost: Money,
}

/// Body of `POST /delivery/availability`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityCheckRequest {
    pub region: String,
    pub product_id: ProductId,
}

/// Response of `POST /delivery/availability`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityCheckResponse {
    pub available: bool,
    pub message: String,
}
