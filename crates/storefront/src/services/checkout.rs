//! Checkout service.
//!
//! Converts a user's cart into a recorded delivery and clears the cart.

use cartline_core::UserId;

use super::DeliveryService;
use crate::config::DeliveryConfig;
use crate::models::{DeliveryAddress, DeliveryInfo};
use crate::store::{CartRepository, DeliveryRepository, MemoryStore, StoreError};

/// Checkout service.
pub struct CheckoutService<'a> {
    carts: CartRepository<'a>,
    deliveries: DeliveryRepository<'a>,
    pricing: DeliveryService<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(store: &'a MemoryStore, config: &'a DeliveryConfig) -> Self {
        Self {
            carts: CartRepository::new(store),
            deliveries: DeliveryRepository::new(store),
            pricing: DeliveryService::new(config),
        }
    }

    /// Check out the user's cart to `address`.
    ///
    /// The cart is emptied and a `Processing` delivery is recorded under a
    /// new order ID. The address is copied into the delivery.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyCart` if the user has no cart or it has no
    /// items, and `StoreError::AmountOutOfRange` if the delivery cost
    /// overflows. Nothing is changed in either case.
    pub async fn checkout(
        &self,
        user_id: UserId,
        address: DeliveryAddress,
    ) -> Result<DeliveryInfo, StoreError> {
        let (cart, delivery_cost) = self
            .carts
            .take_for_checkout(&user_id, |cart| self.pricing.checkout_cost(cart.items()))
            .await?;

        let info = DeliveryInfo::new(user_id, address, delivery_cost);
        self.deliveries.insert(info.clone()).await;

        tracing::info!(
            order_id = %info.order_id,
            user_id = %info.user_id,
            items = cart.items().len(),
            delivery_cost = %info.delivery_cost,
            "Checkout completed"
        );

        Ok(info)
    }
}
