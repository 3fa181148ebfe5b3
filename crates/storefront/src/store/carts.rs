//! Cart repository.

use std::collections::hash_map::Entry;
use std::mem;

use cartline_core::{Money, ProductId, UserId};

use super::{MemoryStore, StoreError};
use crate::models::{Cart, Product};

/// Repository for cart operations.
pub struct CartRepository<'a> {
    store: &'a MemoryStore,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Get the user's cart, creating and storing an empty one if none exists.
    ///
    /// This mutates the store even though callers use it for reads.
    pub async fn get_or_create(&self, user_id: &UserId) -> Cart {
        let mut carts = self.store.carts.write().await;
        carts
            .entry(user_id.clone())
            .or_insert_with(|| Cart::new(user_id.clone()))
            .clone()
    }

    /// Append a product to the user's cart, creating the cart if needed.
    ///
    /// Returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AmountOutOfRange` if the line or cart total would
    /// overflow. Nothing is stored in that case, not even a new empty cart.
    pub async fn add_product(&self, user_id: &UserId, product: Product) -> Result<Cart, StoreError> {
        let mut carts = self.store.carts.write().await;
        let out_of_range = |_| StoreError::AmountOutOfRange(user_id.clone());
        match carts.entry(user_id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().push(product).map_err(out_of_range)?;
                Ok(entry.get().clone())
            }
            Entry::Vacant(entry) => {
                let mut cart = Cart::new(user_id.clone());
                cart.push(product).map_err(out_of_range)?;
                Ok(entry.insert(cart).clone())
            }
        }
    }

    /// Remove the first item with `product_id` from the user's cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CartNotFound` if the user has no cart.
    /// Returns `StoreError::ProductNotInCart` if no item matches.
    /// Returns `StoreError::AmountOutOfRange` if the remaining total would
    /// overflow; the cart is unchanged.
    pub async fn remove_product(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Cart, StoreError> {
        let mut carts = self.store.carts.write().await;
        let cart = carts
            .get_mut(user_id)
            .ok_or_else(|| StoreError::CartNotFound(user_id.clone()))?;
        cart.remove(product_id)
            .map_err(|_| StoreError::AmountOutOfRange(user_id.clone()))?
            .ok_or_else(|| StoreError::ProductNotInCart(product_id.clone()))?;
        Ok(cart.clone())
    }

    /// Price the user's cart and take it for checkout, leaving an empty cart
    /// in its place.
    ///
    /// `price` runs under the cart lock, so the returned cost always belongs
    /// to the returned cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyCart` if the user has no cart or it has no
    /// items. Returns `StoreError::AmountOutOfRange` if `price` returns
    /// `None`. The store is unchanged in both cases.
    pub async fn take_for_checkout<F>(
        &self,
        user_id: &UserId,
        price: F,
    ) -> Result<(Cart, Money), StoreError>
    where
        F: FnOnce(&Cart) -> Option<Money>,
    {
        let mut carts = self.store.carts.write().await;
        let cart = carts
            .get_mut(user_id)
            .filter(|cart| !cart.is_empty())
            .ok_or_else(|| StoreError::EmptyCart(user_id.clone()))?;
        let cost = price(&*cart).ok_or_else(|| StoreError::AmountOutOfRange(user_id.clone()))?;
        Ok((mem::replace(cart, Cart::new(user_id.clone())), cost))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, units: i64, quantity: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("item {id}"),
            price: Money::from_units(units),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_get_or_create_stores_empty_cart() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("u1");

        let cart = repo.get_or_create(&user).await;
        assert!(cart.is_empty());

        // The cart now exists, so removing reports a missing product, not a missing cart.
        let err = repo
            .remove_product(&user, &ProductId::new("p1"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ProductNotInCart(ProductId::new("p1")));
    }

    #[tokio::test]
    async fn test_add_product_creates_cart() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("u1");

        let cart = repo.add_product(&user, product("p1", 10, 2)).await.unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Money::from_units(20));

        let again = repo.get_or_create(&user).await;
        assert_eq!(again, cart);
    }

    #[tokio::test]
    async fn test_remove_product_without_cart() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("nobody");

        let err = repo
            .remove_product(&user, &ProductId::new("p1"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::CartNotFound(user));
    }

    #[tokio::test]
    async fn test_remove_product_updates_total() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("u1");

        repo.add_product(&user, product("p1", 10, 2)).await.unwrap();
        repo.add_product(&user, product("p2", 3, 1)).await.unwrap();

        let cart = repo
            .remove_product(&user, &ProductId::new("p1"))
            .await
            .unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Money::from_units(3));
    }

    #[tokio::test]
    async fn test_take_for_checkout_resets_cart() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("u1");

        repo.add_product(&user, product("p1", 10, 2)).await.unwrap();

        let (taken, cost) = repo
            .take_for_checkout(&user, |cart| Some(cart.total()))
            .await
            .unwrap();
        assert_eq!(taken.items().len(), 1);
        assert_eq!(cost, Money::from_units(20));

        let after = repo.get_or_create(&user).await;
        assert!(after.is_empty());
        assert_eq!(after.total(), Money::ZERO);
    }

    #[tokio::test]
    async fn test_take_for_checkout_rejects_missing_and_empty() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("u1");

        assert_eq!(
            repo.take_for_checkout(&user, |_| Some(Money::ZERO))
                .await
                .unwrap_err(),
            StoreError::EmptyCart(user.clone())
        );

        repo.get_or_create(&user).await;
        assert_eq!(
            repo.take_for_checkout(&user, |_| Some(Money::ZERO))
                .await
                .unwrap_err(),
            StoreError::EmptyCart(user.clone())
        );
    }

    #[tokio::test]
    async fn test_take_for_checkout_keeps_cart_when_pricing_fails() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("u1");
        repo.add_product(&user, product("p1", 10, 2)).await.unwrap();

        let err = repo.take_for_checkout(&user, |_| None).await.unwrap_err();

        assert_eq!(err, StoreError::AmountOutOfRange(user.clone()));
        let cart = repo.get_or_create(&user).await;
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Money::from_units(20));
    }

    #[tokio::test]
    async fn test_overflowing_add_leaves_cart_unchanged() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("u1");
        repo.add_product(&user, product("p1", 10, 2)).await.unwrap();

        let huge = Product {
            price: Money::new(Decimal::MAX),
            ..product("p2", 1, 2)
        };
        let err = repo.add_product(&user, huge).await.unwrap_err();

        assert_eq!(err, StoreError::AmountOutOfRange(user.clone()));
        let cart = repo.get_or_create(&user).await;
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Money::from_units(20));
    }

    #[tokio::test]
    async fn test_overflowing_first_add_creates_no_cart() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);
        let user = UserId::new("fresh");

        let huge = Product {
            price: Money::new(Decimal::MAX),
            ..product("p1", 1, 2)
        };
        assert!(repo.add_product(&user, huge).await.is_err());

        // Still no cart, so removal reports the missing cart.
        let err = repo
            .remove_product(&user, &ProductId::new("p1"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::CartNotFound(user));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_lose_no_update() {
        let store = Arc::new(MemoryStore::new());
        let user = UserId::new("busy");

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                let user = user.clone();
                tokio::spawn(async move {
                    CartRepository::new(&store)
                        .add_product(&user, product(&format!("p{i}"), 1, 1))
                        .await
                        .unwrap();
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        let cart = CartRepository::new(&store).get_or_create(&user).await;
        assert_eq!(cart.items().len(), 64);
        assert_eq!(cart.total(), Money::from_units(64));
    }
}
