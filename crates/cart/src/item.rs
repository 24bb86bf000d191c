//! Cart line item types.
//!
//! A [`ProductSnapshot`] is the catalog data captured the moment an item is
//! added to the cart; a [`CartItem`] is a snapshot plus a quantity. The
//! snapshot is immutable for the item's lifetime in the cart: price and stock
//! ceiling are not re-fetched, so staleness against the live catalog is an
//! accepted limitation handled outside this crate.

use clementine_core::{Price, PriceError, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`ProductSnapshot`].
///
/// These are the only failures the cart ever reports: malformed item data is
/// rejected here, at the boundary, so every [`Cart`](crate::Cart) operation
/// stays a total function.
#[derive(thiserror::Error, Debug, Clone)]
pub enum InvalidItemError {
    /// The product id is empty.
    #[error("product id cannot be empty")]
    EmptyId,
    /// The unit price is invalid (negative).
    #[error(transparent)]
    InvalidPrice(#[from] PriceError),
}

/// Catalog data for a product, captured at add-time.
///
/// `name`, `slug`, and `image_url` are display metadata the cart carries but
/// never interprets. `stock_limit` is the maximum purchasable quantity; a
/// snapshot with `stock_limit == 0` is constructible (the catalog may report
/// a sold-out product) but adding it to a cart is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Id of the underlying product.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Primary image URL.
    pub image_url: String,
    /// Price per unit at capture time.
    pub unit_price: Price,
    /// Maximum purchasable quantity at capture time.
    pub stock_limit: u32,
}

impl ProductSnapshot {
    /// Create a snapshot, validating the raw catalog data.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidItemError`] if `id` is empty or `unit_price` is
    /// negative.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        image_url: impl Into<String>,
        unit_price: Decimal,
        stock_limit: u32,
    ) -> Result<Self, InvalidItemError> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(InvalidItemError::EmptyId);
        }
        Ok(Self {
            id,
            name: name.into(),
            slug: slug.into(),
            image_url: image_url.into(),
            unit_price: Price::new(unit_price)?,
            stock_limit,
        })
    }
}

/// A line item in the cart: a product snapshot plus a quantity.
///
/// The quantity is private so the invariant `1 <= quantity <= stock_limit`
/// can only be established by [`Cart`](crate::Cart) operations (or by
/// deserializing previously persisted items, which
/// [`Cart::from_items`](crate::Cart::from_items) re-checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The captured catalog data.
    #[serde(flatten)]
    pub product: ProductSnapshot,
    quantity: u32,
}

impl CartItem {
    /// Build a line item, clamping the requested quantity into
    /// `[1, stock_limit]`. Returns `None` when `stock_limit` is zero.
    pub(crate) fn new(product: ProductSnapshot, quantity: u32) -> Option<Self> {
        if product.stock_limit < 1 {
            return None;
        }
        let quantity = quantity.clamp(1, product.stock_limit);
        Some(Self { product, quantity })
    }

    /// Id of the underlying product.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Current quantity, always within `[1, stock_limit]`.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Maximum purchasable quantity, fixed at add-time.
    #[must_use]
    pub const fn stock_limit(&self) -> u32 {
        self.product.stock_limit
    }

    /// Whether the quantity has reached the stock ceiling.
    #[must_use]
    pub const fn at_stock_limit(&self) -> bool {
        self.quantity >= self.product.stock_limit
    }

    /// Price for this line: `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price * self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snapshot(stock_limit: u32) -> ProductSnapshot {
        ProductSnapshot::new(
            "prod-1",
            "Running Shoes",
            "running-shoes",
            "https://cdn.example.com/shoes.jpg",
            Decimal::new(8999, 2),
            stock_limit,
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_rejects_empty_id() {
        let result = ProductSnapshot::new("", "X", "x", "", Decimal::ONE, 5);
        assert!(matches!(result, Err(InvalidItemError::EmptyId)));
    }

    #[test]
    fn test_snapshot_rejects_negative_price() {
        let result = ProductSnapshot::new("prod-1", "X", "x", "", Decimal::new(-1, 2), 5);
        assert!(matches!(result, Err(InvalidItemError::InvalidPrice(_))));
    }

    #[test]
    fn test_snapshot_allows_zero_stock() {
        assert_eq!(snapshot(0).stock_limit, 0);
    }

    #[test]
    fn test_item_clamps_quantity() {
        let item = CartItem::new(snapshot(10), 25).unwrap();
        assert_eq!(item.quantity(), 10);

        let item = CartItem::new(snapshot(10), 0).unwrap();
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn test_item_rejects_zero_stock() {
        assert!(CartItem::new(snapshot(0), 1).is_none());
    }

    #[test]
    fn test_line_total() {
        let item = CartItem::new(snapshot(10), 2).unwrap();
        assert_eq!(item.line_total(), Price::from_cents(17_998).unwrap());
    }

    #[test]
    fn test_serde_roundtrip_flattens_product() {
        let item = CartItem::new(snapshot(10), 3).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "prod-1");
        assert_eq!(json["quantity"], 3);

        let parsed: CartItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, item);
    }
}
