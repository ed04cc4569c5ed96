//! Domain validation errors.
//!
//! Each validator has its own error enum. The member facade wraps them into
//! [`FieldError`]s scoped to the request field that produced them.

use super::person_type::PersonType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use thiserror::Error;

/// Errors produced while validating a national identifier (CPF or CNPJ).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Wrong number of digits after normalization.
    #[error("{label} must have {expected} digits, got {got}", label = .person_type.identifier_label())]
    Structural {
        person_type: PersonType,
        expected: usize,
        got: usize,
    },

    /// All digits identical; such sequences are never issued.
    #[error("{label} '{digits}' is a repeated-digit sequence", label = .person_type.identifier_label())]
    RepeatedDigits {
        person_type: PersonType,
        digits: String,
    },

    /// Check digits do not match the mod-11 computation.
    #[error("{label} '{digits}' has invalid check digits", label = .person_type.identifier_label())]
    Checksum {
        person_type: PersonType,
        digits: String,
    },
}

/// Errors produced while validating a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    /// Digit count outside 10..=11.
    #[error("Phone number must have 10 or 11 digits, got {got}")]
    Structural { got: usize },

    /// Leading two digits outside 11..=99.
    #[error("Invalid regional code {0}: must be between 11 and 99")]
    RegionalCode(u8),

    /// Third digit of an 11-digit number outside 6..=9.
    #[error("Invalid mobile indicator {0}: must be 6, 7, 8 or 9")]
    MobileIndicator(u8),
}

/// Which email length bound was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailBound {
    Total,
    LocalPart,
    Domain,
}

impl fmt::Display for EmailBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total => f.write_str("Email address"),
            Self::LocalPart => f.write_str("Email local part"),
            Self::Domain => f.write_str("Email domain"),
        }
    }
}

/// Errors produced while validating an email address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Not a syntactically valid `local@domain` address.
    #[error("Email address '{0}' is invalid")]
    Format(String),

    /// One of the length bounds was exceeded.
    #[error("{bound} cannot exceed {max} characters, got {got}")]
    Length {
        bound: EmailBound,
        max: usize,
        got: usize,
    },
}

/// Business-rule errors on the reference date (birth or founding date).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Reference date {date} cannot be after {today}")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    #[error("Member must be at least {minimum} years old, got {age}")]
    MinimumAge { age: u32, minimum: u32 },
}

/// Errors on the income/revenue figure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount must be greater than zero, got {0}")]
    NonPositive(Decimal),
}

/// Errors on the free-text member name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name cannot exceed {max} characters, got {got}")]
    TooLong { max: usize, got: usize },
}

/// Request field a [`FieldError`] is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Identifier,
    ReferenceDate,
    Amount,
    Phone,
    Email,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Identifier => "identifier",
            Self::ReferenceDate => "reference_date",
            Self::Amount => "amount",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure classes callers map to responses.
///
/// Every kind except [`ErrorKind::DuplicateIdentifier`] is a permanent input
/// rejection; the duplicate kind signals a collision with existing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Structural,
    ChecksumInvalid,
    RepeatedDigits,
    RegionalCode,
    MobileIndicator,
    FormatInvalid,
    LengthExceeded,
    FutureDate,
    MinimumAge,
    NonPositiveAmount,
    DuplicateIdentifier,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::ChecksumInvalid => "checksum_invalid",
            Self::RepeatedDigits => "repeated_digits",
            Self::RegionalCode => "regional_code",
            Self::MobileIndicator => "mobile_indicator",
            Self::FormatInvalid => "format_invalid",
            Self::LengthExceeded => "length_exceeded",
            Self::FutureDate => "future_date",
            Self::MinimumAge => "minimum_age",
            Self::NonPositiveAmount => "non_positive_amount",
            Self::DuplicateIdentifier => "duplicate_identifier",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The underlying cause of a [`FieldError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Name(#[from] NameError),

    /// The canonical identifier is already held by another member.
    #[error("Identifier '{0}' is already registered")]
    DuplicateIdentifier(String),
}

/// A validation failure scoped to one request field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {error}")]
pub struct FieldError {
    pub field: Field,
    pub error: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, error: impl Into<FieldErrorKind>) -> Self {
        Self {
            field,
            error: error.into(),
        }
    }

    pub fn duplicate_identifier(digits: impl Into<String>) -> Self {
        Self {
            field: Field::Identifier,
            error: FieldErrorKind::DuplicateIdentifier(digits.into()),
        }
    }

    /// Classify the failure.
    pub fn kind(&self) -> ErrorKind {
        match &self.error {
            FieldErrorKind::Identifier(e) => match e {
                IdentifierError::Structural { .. } => ErrorKind::Structural,
                IdentifierError::RepeatedDigits { .. } => ErrorKind::RepeatedDigits,
                IdentifierError::Checksum { .. } => ErrorKind::ChecksumInvalid,
            },
            FieldErrorKind::Phone(e) => match e {
                PhoneError::Structural { .. } => ErrorKind::Structural,
                PhoneError::RegionalCode(_) => ErrorKind::RegionalCode,
                PhoneError::MobileIndicator(_) => ErrorKind::MobileIndicator,
            },
            FieldErrorKind::Email(e) => match e {
                EmailError::Format(_) => ErrorKind::FormatInvalid,
                EmailError::Length { .. } => ErrorKind::LengthExceeded,
            },
            FieldErrorKind::Date(e) => match e {
                DateError::FutureDate { .. } => ErrorKind::FutureDate,
                DateError::MinimumAge { .. } => ErrorKind::MinimumAge,
            },
            FieldErrorKind::Amount(_) => ErrorKind::NonPositiveAmount,
            FieldErrorKind::Name(e) => match e {
                NameError::Empty => ErrorKind::Structural,
                NameError::TooLong { .. } => ErrorKind::LengthExceeded,
            },
            FieldErrorKind::DuplicateIdentifier(_) => ErrorKind::DuplicateIdentifier,
        }
    }

    /// True when the failure is a collision with existing state rather than bad input.
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::DuplicateIdentifier
    }
}

// Serde support - serialize as {field, kind, message}
impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FieldError", 3)?;
        state.serialize_field("field", self.field.as_str())?;
        state.serialize_field("kind", self.kind().as_str())?;
        state.serialize_field("message", &self.error.to_string())?;
        state.end()
    }
}
