//! Business logic services for storefront.
//!
//! # Services
//!
//! - `delivery` - Delivery quotes, checkout cost and availability rules
//! - `checkout` - Turns a cart into a recorded delivery

pub mod checkout;
pub mod delivery;

pub use checkout::CheckoutService;
pub use delivery::DeliveryService;
