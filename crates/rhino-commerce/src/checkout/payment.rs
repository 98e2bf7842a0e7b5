//! Payment methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// How the customer pays. No payment is actually processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    #[default]
    CashOnDelivery,
    /// Card or other online payment.
    Card,
}

/// Which set of labels a page uses for payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelSet {
    /// The checkout page radios.
    #[default]
    Checkout,
    /// The product page's cart panel buttons.
    CartPanel,
}

impl PaymentMethod {
    /// Payment methods in display order.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CashOnDelivery, PaymentMethod::Card];

    /// Short code (e.g. form values).
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "COD",
            PaymentMethod::Card => "Card",
        }
    }

    /// Presentation label for a page.
    pub fn label(&self, labels: LabelSet) -> &'static str {
        match (self, labels) {
            (PaymentMethod::CashOnDelivery, _) => "Cash on Delivery",
            (PaymentMethod::Card, LabelSet::Checkout) => "Credit/Debit Card",
            (PaymentMethod::Card, LabelSet::CartPanel) => "Online Payment",
        }
    }

    /// Parse a form code. "Online" is accepted as an alias of "Card".
    pub fn from_code(code: &str) -> Result<Self, CommerceError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "cod" => Ok(PaymentMethod::CashOnDelivery),
            "card" | "online" => Ok(PaymentMethod::Card),
            _ => Err(CommerceError::UnknownPaymentMethod(code.to_string())),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(LabelSet::Checkout))
    }
}
