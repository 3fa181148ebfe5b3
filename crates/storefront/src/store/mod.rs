//! In-memory storage for carts, saved addresses and deliveries.
//!
//! # Maps
//!
//! - `carts` - user ID → [`Cart`]
//! - `addresses` - user ID → saved [`DeliveryAddress`] list (append-only)
//! - `deliveries` - order ID → [`DeliveryInfo`]
//!
//! Nothing is persisted; all data is lost when the process exits.
//!
//! Each map sits behind its own `RwLock`. Repository methods hold one write
//! guard for the whole read-modify-write, so concurrent requests for the same
//! user cannot lose updates. When two maps are involved, `carts` is locked
//! before `deliveries`.
//!
//! # Repositories
//!
//! - [`CartRepository`] - get-or-create, add/remove items, take for checkout
//! - [`AddressRepository`] - list and append saved addresses
//! - [`DeliveryRepository`] - record and look up deliveries

pub mod addresses;
pub mod carts;
pub mod deliveries;

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;

use cartline_core::{OrderId, ProductId, UserId};

use crate::models::{Cart, DeliveryAddress, DeliveryInfo};

pub use addresses::AddressRepository;
pub use carts::CartRepository;
pub use deliveries::DeliveryRepository;

/// Errors from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No cart has been created for this user.
    #[error("no cart for user {0}")]
    CartNotFound(UserId),

    /// The cart has no item with this product ID.
    #[error("product {0} is not in the cart")]
    ProductNotInCart(ProductId),

    /// No delivery was recorded under this order ID.
    #[error("no delivery for order {0}")]
    DeliveryNotFound(OrderId),

    /// Checkout needs a cart with at least one item.
    #[error("cart for user {0} is empty")]
    EmptyCart(UserId),

    /// A cart total or delivery cost for this user would overflow.
    #[error("amount out of range for user {0}")]
    AmountOutOfRange(UserId),
}

/// Process-wide in-memory store.
///
/// Created once at startup and shared through `AppState`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    carts: RwLock<HashMap<UserId, Cart>>,
    addresses: RwLock<HashMap<UserId, Vec<DeliveryAddress>>>,
    deliveries: RwLock<HashMap<OrderId, DeliveryInfo>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
