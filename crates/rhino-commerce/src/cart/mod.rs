//! Shopping cart module.
//!
//! Contains the cart store, line items, the quantity policy and pricing.

mod pricing;
mod quantity;
mod store;

pub use pricing::{CartPricing, LineItemPricing};
pub use quantity::{QuantityPolicy, MAX_QUANTITY_PER_ITEM, MIN_QUANTITY};
pub use store::{CartStore, LineItem};
