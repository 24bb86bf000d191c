//! Clementine Cart - Bounded-quantity shopping cart state container.
//!
//! A [`Cart`] holds an ordered collection of line items, unique by product
//! id, and enforces a per-item stock ceiling captured from the catalog at
//! add-time. Totals and item counts are derived on read, never stored.
//!
//! # Behavior contract
//!
//! Every mutation is a total function: out-of-range requests (stock
//! exhausted, quantity already at the floor, unknown id) resolve to silent
//! no-ops, never errors. This is a deliberate UX policy inherited from the
//! storefront UI - a tap on a disabled-looking "+" button must not surface a
//! failure - and callers must not rely on mutations reporting anything.
//! Malformed item data is instead rejected up front, when a
//! [`ProductSnapshot`] is constructed.
//!
//! # Ownership
//!
//! A `Cart` is a plain value with no interior mutability and no locking. It
//! expects a single exclusive owner (one UI session, one request context);
//! wrap it in a mutex at the boundary if it must be shared across threads.
//!
//! # Example
//!
//! ```
//! use clementine_cart::{Cart, ProductSnapshot};
//! use clementine_core::ProductId;
//! use rust_decimal::Decimal;
//!
//! let shoes = ProductSnapshot::new(
//!     "prod-1",
//!     "Running Shoes",
//!     "running-shoes",
//!     "https://cdn.example.com/shoes.jpg",
//!     Decimal::new(8999, 2),
//!     10,
//! )?;
//!
//! let mut cart = Cart::new();
//! cart.add(shoes.clone());
//! cart.add(shoes); // same product: bumps quantity instead of duplicating
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(format!("{}", cart.total()), "$179.98");
//!
//! cart.remove(&ProductId::new("prod-1"));
//! assert!(cart.is_empty());
//! # Ok::<(), clementine_cart::InvalidItemError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod item;
pub mod state;

pub use item::{CartItem, InvalidItemError, ProductSnapshot};
pub use state::Cart;
