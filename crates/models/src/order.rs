//! Placed order documents.

use chrono::{DateTime, Utc};
use clementine_cart::CartItem;
use clementine_core::{OrderId, OrderStatus, Price, ProductId, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors reported by [`Order::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The order number is missing.
    #[error("order number is required")]
    OrderNumberRequired,
    /// The order has no line items.
    #[error("order must contain at least one item")]
    NoItems,
    /// A line item has a quantity of zero.
    #[error("order item quantity must be at least 1 (product {product})")]
    ItemQuantityZero {
        /// The offending product id.
        product: ProductId,
    },
    /// The payment method is missing.
    #[error("payment method is required")]
    PaymentMethodRequired,
    /// A required shipping address field is empty.
    #[error("shipping address field is required: {field}")]
    AddressFieldRequired {
        /// Name of the empty field.
        field: &'static str,
    },
}

/// A line item on a placed order.
///
/// Like a cart line, this captures the product's name, image, and price at
/// the time of purchase so the order renders the same forever, regardless of
/// later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The purchased product.
    pub product: ProductId,
    /// Display name at purchase time.
    pub name: String,
    /// Image URL at purchase time.
    pub image_url: String,
    /// Units purchased, at least 1.
    pub quantity: u32,
    /// Price per unit at purchase time.
    pub unit_price: Price,
}

impl OrderItem {
    /// Price for this line: `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product: item.id().clone(),
            name: item.product.name.clone(),
            image_url: item.product.image_url.clone(),
            quantity: item.quantity(),
            unit_price: item.product.unit_price,
        }
    }
}

/// The destination an order ships to. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
}

/// The payment processor's result, recorded when payment settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Processor-side transaction id.
    pub id: String,
    /// Processor-side status string.
    pub status: String,
    /// Email the receipt was sent to.
    pub email: String,
}

/// A placed order document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order id.
    pub id: OrderId,
    /// Human-facing order number, unique per store.
    pub order_number: String,
    /// The user who placed the order.
    pub user: UserId,
    /// Purchased lines, at least one.
    pub items: Vec<OrderItem>,
    /// Where the order ships.
    pub shipping_address: ShippingAddress,
    /// How the order was paid for (e.g. "card", "paypal").
    pub payment_method: String,
    /// Processor result, present once payment settles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_result: Option<PaymentResult>,
    /// Sum of line totals.
    pub subtotal: Price,
    /// Tax charged.
    pub tax: Price,
    /// Shipping charged.
    pub shipping_cost: Price,
    /// `subtotal + tax + shipping_cost`.
    pub total: Price,
    /// Lifecycle status, defaults to pending.
    #[serde(default)]
    pub status: OrderStatus,
    /// Whether payment has settled.
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    /// Whether delivery has been confirmed.
    pub is_delivered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    /// Carrier tracking number, once shipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// Free-form notes from the shopper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a pending, unpaid order. `total` is computed from the charge
    /// components; the line items are taken as given.
    #[must_use]
    pub fn new(
        order_number: impl Into<String>,
        user: UserId,
        items: Vec<OrderItem>,
        shipping_address: ShippingAddress,
        payment_method: impl Into<String>,
        subtotal: Price,
        tax: Price,
        shipping_cost: Price,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::generate(),
            order_number: order_number.into(),
            user,
            items,
            shipping_address,
            payment_method: payment_method.into(),
            payment_result: None,
            subtotal,
            tax,
            shipping_cost,
            total: subtotal + tax + shipping_cost,
            status: OrderStatus::default(),
            is_paid: false,
            paid_at: None,
            is_delivered: false,
            delivered_at: None,
            tracking_number: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Generate a fresh order number.
    #[must_use]
    pub fn generate_order_number() -> String {
        format!("ORD-{}", Uuid::new_v4().simple())
    }

    /// Sum of line totals, recomputed from the items. Matches `subtotal` on
    /// a consistent document.
    #[must_use]
    pub fn line_subtotal(&self) -> Price {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Check the document against the schema constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: missing order number, empty
    /// item list, a zero-quantity line, missing payment method, or an empty
    /// shipping address field.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.order_number.trim().is_empty() {
            return Err(OrderError::OrderNumberRequired);
        }
        if self.items.is_empty() {
            return Err(OrderError::NoItems);
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity < 1) {
            return Err(OrderError::ItemQuantityZero {
                product: item.product.clone(),
            });
        }
        if self.payment_method.trim().is_empty() {
            return Err(OrderError::PaymentMethodRequired);
        }
        let address = &self.shipping_address;
        for (field, value) in [
            ("name", &address.name),
            ("street", &address.street),
            ("city", &address.city),
            ("state", &address.state),
            ("zip_code", &address.zip_code),
            ("country", &address.country),
            ("phone", &address.phone),
        ] {
            if value.trim().is_empty() {
                return Err(OrderError::AddressFieldRequired { field });
            }
        }
        Ok(())
    }
}
