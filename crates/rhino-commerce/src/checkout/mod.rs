//! Checkout module.
//!
//! Contains the checkout form state, payment methods and the ephemeral
//! order built at submission.

mod flow;
mod order;
mod payment;

pub use flow::{CheckoutFlow, CheckoutStatus};
pub use order::{Order, OrderAck};
pub use payment::{LabelSet, PaymentMethod};
