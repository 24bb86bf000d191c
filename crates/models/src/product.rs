//! Catalog product documents.

use chrono::{DateTime, Utc};
use clementine_cart::ProductSnapshot;
use clementine_core::{CategoryId, Price, ProductId};
use serde::{Deserialize, Serialize};

/// Errors reported by [`Product::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product name is missing.
    #[error("product name is required")]
    NameRequired,
    /// The product name exceeds the length limit.
    #[error("product name cannot exceed {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The slug is missing.
    #[error("product slug is required")]
    SlugRequired,
    /// The slug contains uppercase characters.
    #[error("product slug must be lowercase: {slug}")]
    SlugNotLowercase {
        /// The offending slug.
        slug: String,
    },
    /// The description is missing.
    #[error("product description is required")]
    DescriptionRequired,
    /// The description exceeds the length limit.
    #[error("product description cannot exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// An image entry has no URL.
    #[error("product image url is required")]
    ImageUrlRequired,
}

/// A product image with alt text for accessibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Search-engine metadata overrides for a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSeo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// A catalog product document.
///
/// `price`, `compare_at_price`, and `cost` are [`Price`] values and therefore
/// non-negative by construction; `validate` covers the remaining schema
/// constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name, at most [`Self::NAME_MAX_LENGTH`] characters.
    pub name: String,
    /// URL slug, lowercase.
    pub slug: String,
    /// Long-form description, at most [`Self::DESCRIPTION_MAX_LENGTH`] characters.
    pub description: String,
    /// Current selling price.
    pub price: Price,
    /// Original price shown struck through, when on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Price>,
    /// Internal unit cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Price>,
    /// Units currently in stock.
    pub stock: u32,
    /// Stock-keeping unit code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Product images, first image is the primary one.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Owning category.
    pub category: CategoryId,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the product is visible in the storefront.
    pub is_active: bool,
    /// Whether the product is featured on the home page.
    pub is_featured: bool,
    /// Arbitrary key/value specifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<serde_json::Value>,
    /// SEO overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<ProductSeo>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Maximum length of a product name.
    pub const NAME_MAX_LENGTH: usize = 200;
    /// Maximum length of a product description.
    pub const DESCRIPTION_MAX_LENGTH: usize = 5000;

    /// Create a product with the schema defaults: active, not featured, no
    /// optional metadata.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        stock: u32,
        category: CategoryId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
            price,
            compare_at_price: None,
            cost: None,
            stock,
            sku: None,
            images: Vec::new(),
            category,
            tags: Vec::new(),
            is_active: true,
            is_featured: false,
            specifications: None,
            seo: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the document against the schema constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: missing or over-long name or
    /// description, missing or non-lowercase slug, or an image without a URL.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if self.name.chars().count() > Self::NAME_MAX_LENGTH {
            return Err(ProductError::NameTooLong {
                max: Self::NAME_MAX_LENGTH,
            });
        }
        if self.slug.trim().is_empty() {
            return Err(ProductError::SlugRequired);
        }
        if self.slug.chars().any(char::is_uppercase) {
            return Err(ProductError::SlugNotLowercase {
                slug: self.slug.clone(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(ProductError::DescriptionRequired);
        }
        if self.description.chars().count() > Self::DESCRIPTION_MAX_LENGTH {
            return Err(ProductError::DescriptionTooLong {
                max: Self::DESCRIPTION_MAX_LENGTH,
            });
        }
        if self.images.iter().any(|image| image.url.trim().is_empty()) {
            return Err(ProductError::ImageUrlRequired);
        }
        Ok(())
    }

    /// Capture the cart-facing view of this product.
    ///
    /// This is the catalog hand-off: the cart keeps the returned snapshot
    /// (price and stock included) unchanged for the item's lifetime, even if
    /// the product document changes afterwards. The primary image URL is
    /// used; a product without images snapshots an empty URL.
    #[must_use]
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: self.slug.clone(),
            image_url: self
                .images
                .first()
                .map(|image| image.url.clone())
                .unwrap_or_default(),
            unit_price: self.price,
            stock_limit: self.stock,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product() -> Product {
        let mut product = Product::new(
            ProductId::new("prod-1"),
            "Running Shoes",
            "running-shoes",
            "Lightweight everyday running shoes.",
            Price::from_cents(8999).unwrap(),
            10,
            CategoryId::new("cat-footwear"),
        );
        product.images.push(ProductImage {
            url: "https://cdn.example.com/shoes.jpg".to_owned(),
            alt: Some("Running Shoes".to_owned()),
        });
        product
    }

    #[test]
    fn test_defaults() {
        let product = product();
        assert!(product.is_active);
        assert!(!product.is_featured);
        assert!(product.sku.is_none());
        assert!(product.tags.is_empty());
    }

    #[test]
    fn test_validate_ok() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn test_validate_name_required() {
        let mut product = product();
        product.name = "   ".to_owned();
        assert_eq!(product.validate(), Err(ProductError::NameRequired));
    }

    #[test]
    fn test_validate_name_too_long() {
        let mut product = product();
        product.name = "x".repeat(201);
        assert_eq!(
            product.validate(),
            Err(ProductError::NameTooLong { max: 200 })
        );
    }

    #[test]
    fn test_validate_slug_lowercase() {
        let mut product = product();
        product.slug = "Running-Shoes".to_owned();
        assert!(matches!(
            product.validate(),
            Err(ProductError::SlugNotLowercase { .. })
        ));
    }

    #[test]
    fn test_validate_description_limits() {
        let mut product = product();
        product.description = String::new();
        assert_eq!(product.validate(), Err(ProductError::DescriptionRequired));

        product.description = "x".repeat(5001);
        assert_eq!(
            product.validate(),
            Err(ProductError::DescriptionTooLong { max: 5000 })
        );
    }

    #[test]
    fn test_validate_image_url_required() {
        let mut product = product();
        product.images.push(ProductImage {
            url: String::new(),
            alt: None,
        });
        assert_eq!(product.validate(), Err(ProductError::ImageUrlRequired));
    }

    #[test]
    fn test_snapshot_captures_catalog_view() {
        let product = product();
        let snapshot = product.snapshot();
        assert_eq!(snapshot.id, product.id);
        assert_eq!(snapshot.unit_price, product.price);
        assert_eq!(snapshot.stock_limit, 10);
        assert_eq!(snapshot.image_url, "https://cdn.example.com/shoes.jpg");
    }

    #[test]
    fn test_snapshot_without_images() {
        let mut product = product();
        product.images.clear();
        assert_eq!(product.snapshot().image_url, "");
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = product();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
