//! Quantity stepper on the product page.

use rhino_commerce::cart::QuantityPolicy;
use rhino_commerce::CommerceError;
use serde::{Deserialize, Serialize};

/// Quantity chosen before adding to the cart. Always within the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityStepper {
    value: i64,
    policy: QuantityPolicy,
}

impl QuantityStepper {
    pub fn new(policy: QuantityPolicy) -> Self {
        Self { value: 1, policy }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Saturates at the policy cap.
    pub fn increment(&mut self) {
        self.value = self.policy.clamp(self.value.saturating_add(1));
    }

    /// Stops at 1.
    pub fn decrement(&mut self) {
        self.value = self.policy.clamp(self.value.saturating_sub(1));
    }

    pub fn set(&mut self, value: i64) {
        self.value = self.policy.clamp(value);
    }

    /// Set from raw input text. Non-numeric text leaves the value unchanged.
    pub fn set_input(&mut self, input: &str) -> Result<i64, CommerceError> {
        self.value = self.policy.parse(input)?;
        Ok(self.value)
    }
}

impl Default for QuantityStepper {
    fn default() -> Self {
        Self::new(QuantityPolicy::default())
    }
}
