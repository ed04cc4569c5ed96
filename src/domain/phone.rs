//! PhoneNumber value object.

use super::errors::PhoneError;
use super::normalize::digits_only;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const MIN_REGIONAL_CODE: u8 = 11;
const MAX_REGIONAL_CODE: u8 = 99;
const MOBILE_INDICATORS: std::ops::RangeInclusive<u8> = 6..=9;

/// Mobile or landline, decided by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Landline,
    Mobile,
}

/// A type-safe wrapper for phone numbers.
///
/// Stored as 10 (landline) or 11 (mobile) digits: a regional code in
/// 11..=99, then for mobiles an indicator digit in 6..=9.
///
/// # Example
///
/// ```
/// use member_registry::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(11) 99999-9999").unwrap();
/// assert_eq!(phone.as_str(), "11999999999");
/// assert_eq!(phone.formatted(), "(11) 99999-9999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, normalizing and validating the input.
    ///
    /// # Validation Rules
    ///
    /// - 10 or 11 digits once masks are stripped
    /// - Regional code (first two digits) between 11 and 99
    /// - For 11 digits, the third digit must be 6, 7, 8 or 9
    ///
    /// # Errors
    ///
    /// Returns the first [`PhoneError`] hit, in the order above.
    pub fn new(phone: &str) -> Result<Self, PhoneError> {
        let digits = digits_only(phone);

        if !(10..=11).contains(&digits.len()) {
            return Err(PhoneError::Structural { got: digits.len() });
        }

        let bytes = digits.as_bytes();
        let regional_code = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        if !(MIN_REGIONAL_CODE..=MAX_REGIONAL_CODE).contains(&regional_code) {
            return Err(PhoneError::RegionalCode(regional_code));
        }

        if digits.len() == 11 {
            let indicator = bytes[2] - b'0';
            if !MOBILE_INDICATORS.contains(&indicator) {
                return Err(PhoneError::MobileIndicator(indicator));
            }
        }

        Ok(Self(digits))
    }

    /// Get the canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the canonical digits.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The two-digit regional code.
    pub fn regional_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn kind(&self) -> PhoneKind {
        if self.0.len() == 11 {
            PhoneKind::Mobile
        } else {
            PhoneKind::Landline
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.kind() == PhoneKind::Mobile
    }

    /// Display form: `(XX) XXXX-XXXX` for landlines, `(XX) XXXXX-XXXX` for mobiles.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        match self.kind() {
            PhoneKind::Landline => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
            PhoneKind::Mobile => format!("({}) {}{}-{}", &d[0..2], &d[2..3], &d[3..7], &d[7..11]),
        }
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landline_with_mask() {
        let phone = PhoneNumber::new("(11) 3333-3333").unwrap();
        assert_eq!(phone.as_str(), "1133333333");
        assert_eq!(phone.formatted(), "(11) 3333-3333");
        assert_eq!(phone.kind(), PhoneKind::Landline);
        assert!(!phone.is_mobile());
    }

    #[test]
    fn test_mobile_without_mask() {
        let phone = PhoneNumber::new("11999999999").unwrap();
        assert_eq!(phone.as_str(), "11999999999");
        assert_eq!(phone.formatted(), "(11) 99999-9999");
        assert!(phone.is_mobile());
        assert_eq!(phone.regional_code(), "11");
    }

    #[test]
    fn test_surrounding_spaces() {
        let phone = PhoneNumber::new(" (11) 99999-9999 ").unwrap();
        assert_eq!(phone.as_str(), "11999999999");
    }

    #[test]
    fn test_phone_validates_length() {
        assert_eq!(
            PhoneNumber::new("119999999").unwrap_err(),
            PhoneError::Structural { got: 9 }
        );
        assert_eq!(
            PhoneNumber::new("119999999999").unwrap_err(),
            PhoneError::Structural { got: 12 }
        );
        assert_eq!(
            PhoneNumber::new("(100) 99999-9999").unwrap_err(),
            PhoneError::Structural { got: 12 }
        );
        assert_eq!(
            PhoneNumber::new("").unwrap_err(),
            PhoneError::Structural { got: 0 }
        );
    }

    #[test]
    fn test_phone_validates_regional_code() {
        assert_eq!(
            PhoneNumber::new("(10) 99999-9999").unwrap_err(),
            PhoneError::RegionalCode(10)
        );
        assert_eq!(
            PhoneNumber::new("(05) 3333-3333").unwrap_err(),
            PhoneError::RegionalCode(5)
        );
        assert!(PhoneNumber::new("(99) 3333-3333").is_ok());
    }

    #[test]
    fn test_phone_validates_mobile_indicator() {
        assert_eq!(
            PhoneNumber::new("(11) 59999-9999").unwrap_err(),
            PhoneError::MobileIndicator(5)
        );
        for indicator in 6..=9 {
            let raw = format!("11{}99999999", indicator);
            assert!(PhoneNumber::new(&raw).unwrap().is_mobile());
        }
    }

    #[test]
    fn test_landline_ignores_indicator_rule() {
        // Third digit 2 is fine at length 10
        assert!(PhoneNumber::new("1123456789").is_ok());
    }

    #[test]
    fn test_idempotent() {
        let phone = PhoneNumber::new("(21) 98765-4321").unwrap();
        let again = PhoneNumber::new(phone.as_str()).unwrap();
        assert_eq!(phone, again);
        assert_eq!(PhoneNumber::new(&phone.formatted()).unwrap(), phone);
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("(11) 99999-9999").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"11999999999\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"(10) 3333-3333\"");
        assert!(result.is_err());
    }
}
