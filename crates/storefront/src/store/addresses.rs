//! Saved delivery address repository.

use cartline_core::UserId;

use super::MemoryStore;
use crate::models::DeliveryAddress;

/// Repository for a user's saved delivery addresses.
pub struct AddressRepository<'a> {
    store: &'a MemoryStore,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// List the user's addresses in the order they were added.
    ///
    /// Returns an empty list for unknown users without storing anything.
    pub async fn list(&self, user_id: &UserId) -> Vec<DeliveryAddress> {
        let addresses = self.store.addresses.read().await;
        addresses.get(user_id).cloned().unwrap_or_default()
    }

    /// Append an address to the user's list and return the full list.
    pub async fn append(&self, user_id: &UserId, address: DeliveryAddress) -> Vec<DeliveryAddress> {
        let mut addresses = self.store.addresses.write().await;
        let list = addresses.entry(user_id.clone()).or_default();
        list.push(address);
        list.clone()
    }
}

#[cfg(test)]
mod tests {
    use cartline_core::AddressId;

    use super::*;

    fn address(id: &str, city: &str) -> DeliveryAddress {
        DeliveryAddress {
            id: AddressId::new(id),
            street: "1 Main St".to_string(),
            city: city.to_string(),
            postal_code: "00000".to_string(),
            country: "Ukraine".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let store = MemoryStore::new();
        let repo = AddressRepository::new(&store);

        assert!(repo.list(&UserId::new("ghost")).await.is_empty());
    }

    #[tokio::test]
    async fn test_append_keeps_call_order() {
        let store = MemoryStore::new();
        let repo = AddressRepository::new(&store);
        let user = UserId::new("u1");

        for (i, city) in ["Kyiv", "Lviv", "Odesa"].iter().enumerate() {
            let list = repo.append(&user, address(&i.to_string(), city)).await;
            assert_eq!(list.len(), i + 1);
        }

        let cities: Vec<_> = repo
            .list(&user)
            .await
            .into_iter()
            .map(|a| a.city)
            .collect();
        assert_eq!(cities, vec!["Kyiv", "Lviv", "Odesa"]);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = MemoryStore::new();
        let repo = AddressRepository::new(&store);

        repo.append(&UserId::new("a"), address("1", "Kyiv")).await;

        assert!(repo.list(&UserId::new("b")).await.is_empty());
    }
}
