//! Catalog module.
//!
//! Contains the static store content: the featured product, its reviews
//! and the related products shown beside it.

mod catalog;
mod product;
mod review;

pub use catalog::Catalog;
pub use product::{Product, ProductSpec, RelatedProduct};
pub use review::{Review, MAX_RATING};
