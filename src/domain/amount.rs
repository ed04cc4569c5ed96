//! Amount value object: declared income (individuals) or revenue (organizations).

use super::errors::AmountError;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// A strictly positive monetary figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// # Errors
    ///
    /// Returns `AmountError::NonPositive` for zero or negative values.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NonPositive(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.0, serializer)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_positive_amount() {
        let amount = Amount::new(Decimal::new(500000, 2)).unwrap();
        assert_eq!(amount.to_string(), "5000.00");
        assert!(Amount::new(Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert_eq!(
            Amount::new(Decimal::ZERO).unwrap_err(),
            AmountError::NonPositive(Decimal::ZERO)
        );
        let negative = Decimal::from_i64(-10).unwrap();
        assert!(Amount::new(negative).is_err());
    }

    #[test]
    fn test_serialization() {
        let amount = Amount::new(Decimal::new(500000, 2)).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"5000.00\"");
    }
}
