//! Clementine Models - Document models for the storefront data layer.
//!
//! These are the documents an external persistence layer stores and
//! rehydrates; this crate only defines their shape, defaults, and validation
//! rules. There is no database access here.
//!
//! # Modules
//!
//! - [`user`] - Shoppers, their addresses, and their saved cart lines
//! - [`product`] - Catalog products with display and SEO metadata
//! - [`order`] - Placed orders with line items and shipping details
//!
//! Each document type has a `validate()` method enforcing the schema
//! constraints (required fields, length limits, non-negative amounts) with a
//! dedicated `thiserror` error enum. Validation is expected at the
//! persistence boundary, before a document is written.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderError, OrderItem, PaymentResult, ShippingAddress};
pub use product::{Product, ProductError, ProductImage, ProductSeo};
pub use user::{Address, SavedCartItem, User, UserError};
