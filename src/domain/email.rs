//! EmailAddress value object.

use super::errors::{EmailBound, EmailError};
use super::normalize::trim_lowercase;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum total length of an address.
pub const MAX_TOTAL_LEN: usize = 254;
/// Maximum length of the part before `@`.
pub const MAX_LOCAL_LEN: usize = 64;
/// Maximum length of the part after `@`.
pub const MAX_DOMAIN_LEN: usize = 190;

// Dot-atom local part; dotted hostname domain with at least two labels.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$",
    )
    .expect("Failed to compile email regex")
});

/// An optional, validated email address.
///
/// The field is optional, so the empty value is a valid state: an absent or
/// blank input yields [`EmailAddress::empty`]. A non-empty value is always
/// lower-cased, trimmed and within the length bounds.
///
/// # Example
///
/// ```
/// use member_registry::domain::EmailAddress;
///
/// let email = EmailAddress::new(Some(" User@Example.com ")).unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// assert!(EmailAddress::new(None).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, normalizing and validating the input.
    ///
    /// # Validation Rules
    ///
    /// - `None` or a blank string is the empty address
    /// - Must be a `local@domain` address with a dotted domain
    /// - At most 254 characters overall, 64 in the local part, 190 in the domain
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Format` for bad syntax, `EmailError::Length` naming
    /// the first bound exceeded.
    pub fn new(email: Option<&str>) -> Result<Self, EmailError> {
        let email = match email {
            Some(raw) => trim_lowercase(raw),
            None => return Ok(Self::empty()),
        };

        if email.is_empty() {
            return Ok(Self::empty());
        }

        if !EMAIL_REGEX.is_match(&email) {
            return Err(EmailError::Format(email));
        }

        check_bound(EmailBound::Total, email.len(), MAX_TOTAL_LEN)?;

        // The regex guarantees exactly one '@'
        let (local, domain) = email
            .split_once('@')
            .ok_or_else(|| EmailError::Format(email.clone()))?;
        check_bound(EmailBound::LocalPart, local.len(), MAX_LOCAL_LEN)?;
        check_bound(EmailBound::Domain, domain.len(), MAX_DOMAIN_LEN)?;

        Ok(Self(email))
    }

    /// The empty (absent) address.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the email address as a string slice (empty when absent).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `None` when absent, the address otherwise.
    pub fn as_option(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@'); empty when absent.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Get the domain part (after '@'); empty when absent.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

fn check_bound(bound: EmailBound, got: usize, max: usize) -> Result<(), EmailError> {
    if got > max {
        return Err(EmailError::Length { bound, max, got });
    }
    Ok(())
}

// Serde support - serialize as string, null when absent
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

// Serde support - deserialize from optional string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        EmailAddress::new(s.as_deref()).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
