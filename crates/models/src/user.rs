//! Shopper documents.

use chrono::{DateTime, Utc};
use clementine_cart::{Cart, CartItem};
use clementine_core::{Email, ProductId, UserId, UserRole};
use serde::{Deserialize, Serialize};

/// Errors reported by [`User::validate`] and [`User::check_password`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// The display name is missing.
    #[error("name is required")]
    NameRequired,
    /// The raw password is too short.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// A saved cart line has a quantity of zero.
    #[error("saved cart item quantity must be at least 1 (product {product})")]
    SavedItemQuantityZero {
        /// The offending product id.
        product: ProductId,
    },
    /// More than one address is flagged as the default.
    #[error("at most one address can be the default")]
    MultipleDefaultAddresses,
}

/// A shipping or billing address on a user document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    /// Whether this is the user's default address.
    pub is_default: bool,
}

/// A cart line persisted on the user document.
///
/// Only the product reference and quantity are stored; display data and
/// pricing are re-captured from the catalog when the cart is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCartItem {
    /// The referenced product.
    pub product: ProductId,
    /// Units saved, at least 1.
    pub quantity: u32,
    /// When the line was saved.
    pub added_at: DateTime<Utc>,
}

impl From<&CartItem> for SavedCartItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product: item.id().clone(),
            quantity: item.quantity(),
            added_at: Utc::now(),
        }
    }
}

/// A storefront user document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, normalized at parse time.
    pub email: Email,
    /// Hash of the user's password. The raw password is checked with
    /// [`check_password`](Self::check_password) before hashing; only the
    /// hash is ever stored.
    pub password_hash: String,
    /// When the email was verified, if it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<DateTime<Utc>>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Role, defaults to a regular shopper.
    #[serde(default)]
    pub role: UserRole,
    /// Saved addresses.
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Cart lines persisted across sessions.
    #[serde(default)]
    pub cart_items: Vec<SavedCartItem>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Minimum length of a raw password.
    pub const PASSWORD_MIN_LENGTH: usize = 6;

    /// Create a user with the schema defaults: shopper role, unverified
    /// email, no addresses, empty saved cart.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: Email,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email,
            password_hash: password_hash.into(),
            email_verified: None,
            image: None,
            role: UserRole::default(),
            addresses: Vec::new(),
            cart_items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check a raw password against the schema's minimum length, before it
    /// is hashed.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::PasswordTooShort`] for passwords under
    /// [`Self::PASSWORD_MIN_LENGTH`] characters.
    pub fn check_password(raw: &str) -> Result<(), UserError> {
        if raw.chars().count() < Self::PASSWORD_MIN_LENGTH {
            return Err(UserError::PasswordTooShort {
                min: Self::PASSWORD_MIN_LENGTH,
            });
        }
        Ok(())
    }

    /// Check the document against the schema constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: missing name, a saved cart
    /// line with zero quantity, or more than one default address.
    pub fn validate(&self) -> Result<(), UserError> {
        if self.name.trim().is_empty() {
            return Err(UserError::NameRequired);
        }
        if let Some(item) = self.cart_items.iter().find(|item| item.quantity < 1) {
            return Err(UserError::SavedItemQuantityZero {
                product: item.product.clone(),
            });
        }
        if self.addresses.iter().filter(|a| a.is_default).count() > 1 {
            return Err(UserError::MultipleDefaultAddresses);
        }
        Ok(())
    }

    /// The user's default address, if one is flagged.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// Persist the lines of a live cart onto this document.
    ///
    /// This is the serialization side of the persistence boundary: the cart
    /// itself exposes no storage, so its items are snapshotted here and
    /// rebuilt from the catalog on the next session.
    pub fn save_cart(&mut self, cart: &Cart) {
        self.cart_items = cart.items().iter().map(SavedCartItem::from).collect();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clementine_cart::ProductSnapshot;
    use rust_decimal::Decimal;

    use super::*;

    fn user() -> User {
        User::new(
            UserId::new("u-1"),
            "Test Shopper",
            Email::parse("shopper@example.com").unwrap(),
            "$argon2id$stub",
        )
    }

    #[test]
    fn test_defaults() {
        let user = user();
        assert_eq!(user.role, UserRole::User);
        assert!(user.email_verified.is_none());
        assert!(user.addresses.is_empty());
        assert!(user.cart_items.is_empty());
    }

    #[test]
    fn test_check_password_minimum() {
        assert_eq!(
            User::check_password("12345"),
            Err(UserError::PasswordTooShort { min: 6 })
        );
        assert!(User::check_password("123456").is_ok());
    }

    #[test]
    fn test_validate_name_required() {
        let mut user = user();
        user.name = String::new();
        assert_eq!(user.validate(), Err(UserError::NameRequired));
    }

    #[test]
    fn test_validate_saved_quantity() {
        let mut user = user();
        user.cart_items.push(SavedCartItem {
            product: ProductId::new("prod-1"),
            quantity: 0,
            added_at: Utc::now(),
        });
        assert!(matches!(
            user.validate(),
            Err(UserError::SavedItemQuantityZero { .. })
        ));
    }

    #[test]
    fn test_default_address() {
        let mut user = user();
        assert!(user.default_address().is_none());

        user.addresses.push(Address {
            street: "1 Main St".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip_code: "62701".to_owned(),
            country: "US".to_owned(),
            is_default: false,
        });
        user.addresses.push(Address {
            street: "2 Oak Ave".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip_code: "62702".to_owned(),
            country: "US".to_owned(),
            is_default: true,
        });

        assert_eq!(user.default_address().unwrap().street, "2 Oak Ave");
        assert!(user.validate().is_ok());

        user.addresses.first_mut().unwrap().is_default = true;
        assert_eq!(user.validate(), Err(UserError::MultipleDefaultAddresses));
    }

    #[test]
    fn test_save_cart_snapshots_lines() {
        let snapshot = ProductSnapshot::new(
            "prod-1",
            "Running Shoes",
            "running-shoes",
            "",
            Decimal::new(8999, 2),
            10,
        )
        .unwrap();

        let mut cart = Cart::new();
        cart.add(snapshot.clone());
        cart.add(snapshot);

        let mut user = user();
        user.save_cart(&cart);

        assert_eq!(user.cart_items.len(), 1);
        let saved = user.cart_items.first().unwrap();
        assert_eq!(saved.product, ProductId::new("prod-1"));
        assert_eq!(saved.quantity, 2);
        assert!(user.validate().is_ok());
    }
}
