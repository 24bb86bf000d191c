//! Integration tests for Clementine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clementine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_to_order` - Catalog to cart to order-line flow, plus the
//!   persistence round trip through serialized cart items
//!
//! The tests live under `tests/` and exercise the crates together the way a
//! storefront session would: capture product snapshots from catalog
//! documents, mutate a cart, persist it on a user document, and convert the
//! final lines into an order.
