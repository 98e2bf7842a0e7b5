//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Quantity field contained something other than an integer.
    #[error("Invalid quantity input: {0:?}")]
    InvalidQuantityInput(String),

    /// Price below zero.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Price currency differs from the cart currency.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Unknown payment method code.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}
