//! Product document validation command.

use std::path::Path;

use clementine_models::{Product, ProductError};

/// Errors that can occur while validating a product file.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The file could not be read.
    #[error("failed to read product file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid product JSON document.
    #[error("failed to parse product document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document violates a schema constraint.
    #[error("product document is invalid: {0}")]
    Invalid(#[from] ProductError),
}

/// Parse a product JSON document and run schema validation.
///
/// # Errors
///
/// Returns [`ValidateError`] if the file cannot be read, does not parse as a
/// product document, or violates a schema constraint.
pub fn validate(path: &Path) -> Result<(), ValidateError> {
    let raw = std::fs::read_to_string(path)?;
    let product: Product = serde_json::from_str(&raw)?;
    product.validate()?;

    tracing::info!(
        id = %product.id,
        name = %product.name,
        price = %product.price,
        stock = product.stock,
        "Product document is valid"
    );
    Ok(())
}
