//! Domain models for the storefront.
//!
//! These are both the stored records and the JSON bodies exchanged over HTTP.

pub mod address;
pub mod cart;
pub mod delivery;

pub use address::DeliveryAddress;
pub use cart::{AmountOutOfRange, Cart, Product};
pub use delivery::{
    AvailabilityCheckRequest, AvailabilityCheckResponse, DeliveryCostRequest,
    DeliveryCostResponse, DeliveryInfo,
};
