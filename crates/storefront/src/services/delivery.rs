//! Delivery pricing and availability rules.
//!
//! All rules are pure functions of their inputs and the [`DeliveryConfig`].

use cartline_core::{Money, ProductId};

use crate::config::DeliveryConfig;
use crate::models::{AvailabilityCheckResponse, DeliveryAddress, Product};

/// Shown when a product can be delivered.
pub const AVAILABLE_MESSAGE: &str = "Product is available for delivery";
/// Shown when a product cannot be delivered to the requested region.
pub const UNAVAILABLE_MESSAGE: &str = "Product is not available for delivery to this region";

/// Delivery rules service.
pub struct DeliveryService<'a> {
    config: &'a DeliveryConfig,
}

impl<'a> DeliveryService<'a> {
    /// Create a new delivery service.
    #[must_use]
    pub const fn new(config: &'a DeliveryConfig) -> Self {
        Self { config }
    }

    /// Quote a delivery to `address`.
    ///
    /// Domestic countries get the domestic rate, everything else (including an
    /// empty country) gets the international rate.
    #[must_use]
    pub fn quote(&self, address: &DeliveryAddress) -> Money {
        if self.config.is_domestic(&address.country) {
            self.config.domestic_rate
        } else {
            self.config.international_rate
        }
    }

    /// Delivery cost charged at checkout.
    ///
    /// Base fee plus the full value of the goods. The goods value is counted
    /// here as well as in the cart total. Returns `None` on overflow.
    #[must_use]
    pub fn checkout_cost(&self, items: &[Product]) -> Option<Money> {
        let goods = items.iter().try_fold(Money::ZERO, |sum, item| {
            sum.checked_add(item.line_total().ok()?)
        })?;
        self.config.checkout_base_fee.checked_add(goods)
    }

    /// Whether `product_id` can be delivered to `region`.
    ///
    /// Placeholder rule: products whose ID ends in `1` are unavailable in the
    /// restricted regions.
    #[must_use]
    pub fn check_availability(&self, region: &str, product_id: &ProductId) -> AvailabilityCheckResponse {
        if self.config.is_restricted(region) && product_id.as_str().ends_with('1') {
            AvailabilityCheckResponse {
                available: false,
                message: UNAVAILABLE_MESSAGE.to_string(),
            }
        } else {
            AvailabilityCheckResponse {
                available: true,
                message: AVAILABLE_MESSAGE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cartline_core::AddressId;

    use super::*;

    fn address(country: &str) -> DeliveryAddress {
        DeliveryAddress {
            id: AddressId::new("a1"),
            street: "15 Hrushevskoho St".to_string(),
            city: "Lviv".to_string(),
            postal_code: "79000".to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_quote_domestic_any_case() {
        let config = DeliveryConfig::default();
        let service = DeliveryService::new(&config);

        for country in ["Ukraine", "ukraine", "UKRAINE", "Україна", "україна"] {
            assert_eq!(service.quote(&address(country)), Money::from_units(5), "{country}");
        }
    }

    #[test]
    fn test_quote_international() {
        let config = DeliveryConfig::default();
        let service = DeliveryService::new(&config);

        for country in ["Poland", "", "Ukraine ", "USA"] {
            assert_eq!(service.quote(&address(country)), Money::from_units(15), "{country:?}");
        }
    }

    #[test]
    fn test_checkout_cost_adds_base_fee_to_goods() {
        let config = DeliveryConfig::default();
        let service = DeliveryService::new(&config);
        let items = vec![Product {
            id: ProductId::new("p1"),
            name: "Mug".to_string(),
            price: Money::from_units(10),
            quantity: 2,
        }];

        assert_eq!(service.checkout_cost(&items), Some(Money::from_units(25)));
        assert_eq!(service.checkout_cost(&[]), Some(Money::from_units(5)));
    }

    #[test]
    fn test_checkout_cost_overflow() {
        let config = DeliveryConfig::default();
        let service = DeliveryService::new(&config);
        let items = vec![Product {
            id: ProductId::new("p1"),
            name: "Vault".to_string(),
            price: Money::new(rust_decimal::Decimal::MAX),
            quantity: 1,
        }];

        // The goods fit, the base fee on top does not.
        assert_eq!(service.checkout_cost(&items), None);
    }

    #[test]
    fn test_availability_restricted_region_and_suffix() {
        let config = DeliveryConfig::default();
        let service = DeliveryService::new(&config);

        let blocked = service.check_availability("east", &ProductId::new("abc1231"));
        assert!(!blocked.available);
        assert_eq!(blocked.message, UNAVAILABLE_MESSAGE);

        assert!(!service.check_availability("Схід", &ProductId::new("1")).available);
    }

    #[test]
    fn test_availability_otherwise_available() {
        let config = DeliveryConfig::default();
        let service = DeliveryService::new(&config);

        let cases = [
            ("East", "abc1232"),
            ("West", "abc1231"),
            ("", "1"),
            ("East", ""),
        ];
        for (region, product_id) in cases {
            let response = service.check_availability(region, &ProductId::new(product_id));
            assert!(response.available, "{region:?} {product_id:?}");
            assert_eq!(response.message, AVAILABLE_MESSAGE);
        }
    }

    #[test]
    fn test_rules_follow_config() {
        let config = DeliveryConfig {
            checkout_base_fee: Money::from_units(1),
            domestic_rate: Money::from_units(2),
            international_rate: Money::from_units(3),
            domestic_countries: vec!["Poland".to_string()],
            restricted_regions: vec!["North".to_string()],
        };
        let service = DeliveryService::new(&config);

        assert_eq!(service.quote(&address("poland")), Money::from_units(2));
        assert_eq!(service.quote(&address("Ukraine")), Money::from_units(3));
        assert_eq!(service.checkout_cost(&[]), Some(Money::from_units(1)));
        assert!(!service.check_availability("NORTH", &ProductId::new("x1")).available);
        assert!(service.check_availability("East", &ProductId::new("x1")).available);
    }
}
