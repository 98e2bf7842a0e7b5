//! Product types.

use serde::{Deserialize, Serialize};

use crate::catalog::Review;
use crate::ids::ProductId;
use crate::money::Money;

/// A named technical specification (e.g. "Weight" / "80g").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSpec {
    pub name: String,
    pub value: String,
}

impl ProductSpec {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A product with its full detail-page content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Key feature bullet points.
    pub features: Vec<String>,
    /// Unit price, inclusive of taxes.
    pub price: Money,
    /// Gallery image URLs; the first is the primary image.
    pub images: Vec<String>,
    /// Technical specifications in display order.
    pub specs: Vec<ProductSpec>,
    /// Customer reviews.
    pub reviews: Vec<Review>,
    /// Optional merchandising badge (e.g. "Best Seller").
    pub badge: Option<String>,
}

impl Product {
    /// Gallery image at `index`.
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// Mean star rating, or `None` without reviews.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(sum as f32 / self.reviews.len() as f32)
    }
}

/// A product teaser shown under "You Might Also Like".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl RelatedProduct {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}
