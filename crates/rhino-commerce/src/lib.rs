//! Catalog, cart and checkout logic for the RhinoFuse storefront.
//!
//! - **Catalog**: the featured product, its reviews and related products
//! - **Cart**: the cart store with its quantity policy and pricing
//! - **Checkout**: address and payment form, ephemeral orders
//!
//! # Example
//!
//! ```
//! use rhino_commerce::prelude::*;
//!
//! let catalog = Catalog::default();
//! let mut cart = CartStore::default();
//! cart.add_product(&catalog.featured, 3).unwrap();
//! assert_eq!(cart.total().to_string(), "\u{20b9}20997");
//!
//! let mut checkout = CheckoutFlow::new();
//! checkout.set_address("12 MG Road, Bengaluru");
//! let ack = checkout.place_order(&mut cart);
//! assert_eq!(ack.item_count, 3);
//! assert!(cart.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductSpec, RelatedProduct, Review};

    // Cart
    pub use crate::cart::{
        CartPricing, CartStore, LineItem, LineItemPricing, QuantityPolicy, MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStatus, LabelSet, Order, OrderAck, PaymentMethod,
    };
}
