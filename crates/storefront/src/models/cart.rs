//! Cart and product line items.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use cartline_core::{Money, ProductId, UserId};

/// A cart amount left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amount out of range")]
pub struct AmountOutOfRange;

/// A product line in a cart.
///
/// Price and quantity are taken as given; negative values are not rejected.
/// Only lines whose totals overflow are refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Generated when the request omits it.
    #[serde(default = "ProductId::generate")]
    pub id: ProductId,
    pub name: String,
    /// Unit price.
    pub price: Money,
    pub quantity: i64,
}

impl Product {
    /// Price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns `AmountOutOfRange` if the product overflows.
    pub fn line_total(&self) -> Result<Money, AmountOutOfRange> {
        self.price
            .checked_times(self.quantity)
            .ok_or(AmountOutOfRange)
    }
}

/// A user's pending cart.
///
/// `total` always equals the sum of [`Product::line_total`] over `items`.
/// Fields are private so that [`Cart::push`] and [`Cart::remove`] are the
/// only ways to change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    user_id: UserId,
    #[serde(default)]
    items: Vec<Product>,
    #[serde(default)]
    total: Money,
}

impl Cart {
    /// Create an empty cart for `user_id`.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total: Money::ZERO,
        }
    }

    /// Append a product and add its line total.
    ///
    /// # Errors
    ///
    /// Returns `AmountOutOfRange` if the line total or the new cart total
    /// overflows. The cart is unchanged in that case.
    pub fn push(&mut self, product: Product) -> Result<(), AmountOutOfRange> {
        self.total = self
            .total
            .checked_add(product.line_total()?)
            .ok_or(AmountOutOfRange)?;
        self.items.push(product);
        Ok(())
    }

    /// Remove the first item with `product_id` and subtract its line total.
    ///
    /// Returns the removed item, or `None` if no item matches.
    ///
    /// # Errors
    ///
    /// Returns `AmountOutOfRange` if the remaining total overflows, which can
    /// only happen when large positive and negative lines are mixed. The cart
    /// is unchanged in that case.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<Option<Product>, AmountOutOfRange> {
        let Some((index, item)) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| &item.id == product_id)
        else {
            return Ok(None);
        };
        self.total = self
            .total
            .checked_sub(item.line_total()?)
            .ok_or(AmountOutOfRange)?;
        Ok(Some(self.items.remove(index)))
    }

    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
