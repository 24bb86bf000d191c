//! The cart state container.

use clementine_core::{Price, ProductId};
use serde::Serialize;

use crate::item::{CartItem, ProductSnapshot};

/// An ordered collection of cart line items, unique by product id.
///
/// Invariants maintained by every operation:
///
/// - no two items share a product id;
/// - every item satisfies `1 <= quantity <= stock_limit`.
///
/// All mutations are silent no-ops when they fall out of range; see the
/// [crate-level docs](crate) for the behavior contract. Lookups are linear
/// scans - carts hold at most a few dozen distinct lines, and preserving the
/// order items were added in matters for display.
///
/// `Cart` itself has no `Deserialize` implementation: persistence callers
/// snapshot [`items`](Self::items) and rehydrate through
/// [`from_items`](Self::from_items), which re-establishes the invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rehydrate a cart from previously persisted line items.
    ///
    /// Persisted data is untrusted: duplicate product ids are dropped
    /// (keeping the first occurrence), items whose `stock_limit` is zero are
    /// dropped, and quantities are clamped into `[1, stock_limit]`. Item
    /// order is preserved.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if cart.find(item.id()).is_none() {
                let quantity = item.quantity();
                if let Some(item) = CartItem::new(item.product, quantity) {
                    cart.items.push(item);
                }
            }
        }
        cart
    }

    /// Add one unit of a product to the cart.
    ///
    /// Equivalent to [`add_with_quantity`](Self::add_with_quantity) with a
    /// requested quantity of 1.
    pub fn add(&mut self, product: ProductSnapshot) {
        self.add_with_quantity(product, 1);
    }

    /// Add a product to the cart with a requested quantity.
    ///
    /// If the product is not yet in the cart, it is inserted with the
    /// requested quantity clamped into `[1, stock_limit]`; when
    /// `stock_limit` is zero nothing is inserted. If the product is already
    /// in the cart, its quantity increases by exactly 1 while below the
    /// stock ceiling - the requested quantity is ignored on this branch,
    /// matching a repeated "Add to Cart" tap.
    pub fn add_with_quantity(&mut self, product: ProductSnapshot, quantity: u32) {
        match self.find_mut(&product.id) {
            Some(existing) => {
                if !existing.at_stock_limit() {
                    let bumped = existing.quantity() + 1;
                    existing.set_quantity(bumped);
                }
            }
            None => {
                if let Some(item) = CartItem::new(product, quantity) {
                    self.items.push(item);
                }
            }
        }
    }

    /// Remove the item with the given product id.
    ///
    /// No-op if the id is not in the cart; removing twice is harmless.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Set an item's quantity to an exact value.
    ///
    /// Applied only when the item exists and `0 < quantity <= stock_limit`;
    /// any other request leaves the cart unchanged. Use
    /// [`remove`](Self::remove) to take an item out - a quantity of zero is
    /// never valid.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(item) = self.find_mut(id) {
            if quantity > 0 && quantity <= item.stock_limit() {
                item.set_quantity(quantity);
            }
        }
    }

    /// Increase an item's quantity by 1, up to its stock ceiling.
    pub fn increment(&mut self, id: &ProductId) {
        if let Some(item) = self.find_mut(id) {
            if !item.at_stock_limit() {
                let bumped = item.quantity() + 1;
                item.set_quantity(bumped);
            }
        }
    }

    /// Decrease an item's quantity by 1, down to a floor of 1.
    ///
    /// Never removes the item; a cart line always holds at least one unit.
    pub fn decrement(&mut self, id: &ProductId) {
        if let Some(item) = self.find_mut(id) {
            if item.quantity() > 1 {
                let dropped = item.quantity() - 1;
                item.set_quantity(dropped);
            }
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * quantity` over all items.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(CartItem::quantity).sum()
    }

    /// The line items, in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.find(id)
    }

    /// Number of distinct lines (not units) in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}
