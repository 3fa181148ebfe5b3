//! Delivery repository.

use cartline_core::OrderId;

use super::{MemoryStore, StoreError};
use crate::models::DeliveryInfo;

/// Repository for deliveries created at checkout.
pub struct DeliveryRepository<'a> {
    store: &'a MemoryStore,
}

impl<'a> DeliveryRepository<'a> {
    /// Create a new delivery repository.
    #[must_use]
    pub const fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Record a delivery under its order ID.
    pub async fn insert(&self, info: DeliveryInfo) {
        let mut deliveries = self.store.deliveries.write().await;
        deliveries.insert(info.order_id.clone(), info);
    }

    /// Look up a delivery by order ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DeliveryNotFound` if no delivery has this order ID.
    pub async fn get(&self, order_id: &OrderId) -> Result<DeliveryInfo, StoreError> {
        let deliveries = self.store.deliveries.read().await;
        deliveries
            .get(order_id)
            .cloned()
            .ok_or_else(|| StoreError::DeliveryNotFound(order_id.clone()))
    }
}
