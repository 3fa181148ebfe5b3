//! Delivery address domain type.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cartline_core::AddressId;

/// A delivery address.
///
/// Either attached to a checkout (copied into the resulting
/// [`DeliveryInfo`](super::DeliveryInfo)) or saved to a user's address book.
/// All fields are free text; nothing is validated beyond presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryAddress {
    /// Generated when the request omits it.
    #[serde(default = "AddressId::generate")]
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_id_is_generated() {
        let address: DeliveryAddress = serde_json::from_value(json!({
            "street": "10 Shevchenka St",
            "city": "Kyiv",
            "postal_code": "01001",
            "country": "Ukraine"
        }))
        .unwrap();

        assert_eq!(address.id.as_str().len(), 36);
        assert_eq!(address.city, "Kyiv");
    }

    #[test]
    fn test_supplied_id_is_kept() {
        let address: DeliveryAddress = serde_json::from_value(json!({
            "id": "home",
            "street": "22 Nezalezhnosti St",
            "city": "Odesa",
            "postal_code": "65000",
            "country": "Ukraine"
        }))
        .unwrap();

        assert_eq!(address.id, AddressId::new("home"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_value::<DeliveryAddress>(json!({
            "street": "Main St",
            "city": "Lviv",
            "country": "Ukraine"
        }));
        assert!(result.is_err());
    }
}
