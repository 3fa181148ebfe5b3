//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Delivery status label attached to an order.
///
/// Every delivery starts out as `Processing`. The later labels are part of
/// the wire vocabulary but nothing in the service moves a delivery to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum DeliveryStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}
