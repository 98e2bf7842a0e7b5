//! Quantity validation policy.
//!
//! Every quantity that reaches the cart goes through one policy: clamp into
//! `[1, max]`. Raw text from a quantity field is parsed first; text that is
//! not an integer is rejected rather than guessed at.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Minimum quantity of any line item.
pub const MIN_QUANTITY: i64 = 1;

/// Clamp-to-range policy for line item quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityPolicy {
    max: i64,
}

impl QuantityPolicy {
    /// Create a policy with the given cap (values below 1 become 1).
    pub fn new(max: i64) -> Self {
        Self {
            max: max.max(MIN_QUANTITY),
        }
    }

    /// The cap.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Clamp into `[1, max]`.
    pub fn clamp(&self, quantity: i64) -> i64 {
        quantity.clamp(MIN_QUANTITY, self.max)
    }

    /// `current + added`, saturating at the cap.
    pub fn combine(&self, current: i64, added: i64) -> i64 {
        self.clamp(current.saturating_add(self.clamp(added)))
    }

    /// Parse raw text from a quantity field and clamp it.
    ///
    /// Surrounding whitespace is ignored. Integers too large for `i64` clamp
    /// to the cap; anything non-numeric is an error.
    pub fn parse(&self, input: &str) -> Result<i64, CommerceError> {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Ok(self.clamp(value)),
            Err(_) if is_integer_literal(trimmed) => {
                if trimmed.starts_with('-') {
                    Ok(MIN_QUANTITY)
                } else {
                    Ok(self.max)
                }
            }
            Err(_) => Err(CommerceError::InvalidQuantityInput(input.to_string())),
        }
    }
}

impl Default for QuantityPolicy {
    fn default() -> Self {
        Self::new(MAX_QUANTITY_PER_ITEM)
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let policy = QuantityPolicy::default();
        assert_eq!(policy.clamp(0), 1);
        assert_eq!(policy.clamp(-4), 1);
        assert_eq!(policy.clamp(3), 3);
        assert_eq!(policy.clamp(1_000_000), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_combine_saturates() {
        let policy = QuantityPolicy::new(10);
        assert_eq!(policy.combine(4, 3), 7);
        assert_eq!(policy.combine(8, 5), 10);
        assert_eq!(policy.combine(2, 0), 3);
        assert_eq!(policy.combine(i64::MAX, i64::MAX), 10);
    }

    #[test]
    fn test_parse() {
        let policy = QuantityPolicy::default();
        assert_eq!(policy.parse("3"), Ok(3));
        assert_eq!(policy.parse(" 12 "), Ok(12));
        assert_eq!(policy.parse("0"), Ok(1));
        assert_eq!(policy.parse("-7"), Ok(1));
        assert_eq!(policy.parse("99999999999999999999999"), Ok(MAX_QUANTITY_PER_ITEM));
        assert_eq!(policy.parse("-99999999999999999999999"), Ok(1));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let policy = QuantityPolicy::default();
        for input in ["", "abc", "2.5", "NaN", "1e3", "-"] {
            assert_eq!(
                policy.parse(input),
                Err(CommerceError::InvalidQuantityInput(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_policy_floor() {
        assert_eq!(QuantityPolicy::new(0).max(), 1);
    }
}
