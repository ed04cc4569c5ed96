//! NationalIdentifier value object and person-type dispatch.

use super::errors::IdentifierError;
use super::normalize::digits_only;
use super::person_type::PersonType;
use super::{individual_id, organization_id};
use serde::{Serialize, Serializer};
use std::fmt;

/// A checksum-valid CPF or CNPJ in canonical (digit-only) form.
///
/// Instances only come out of [`validate_identifier`] or
/// [`append_check_digits`], so the digit count always matches the
/// person type and both check digits are correct.
///
/// # Example
///
/// ```
/// use member_registry::domain::{validate_identifier, PersonType};
///
/// let cpf = validate_identifier("123.456.789-09", PersonType::Individual).unwrap();
/// assert_eq!(cpf.as_str(), "12345678909");
/// assert_eq!(cpf.formatted(), "123.456.789-09");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalIdentifier {
    person_type: PersonType,
    digits: String,
}

impl NationalIdentifier {
    /// Get the canonical digits.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Convert into the canonical digits.
    pub fn into_inner(self) -> String {
        self.digits
    }

    pub fn person_type(&self) -> PersonType {
        self.person_type
    }

    /// Display form: `XXX.XXX.XXX-XX` for a CPF, `XX.XXX.XXX/XXXX-XX` for a CNPJ.
    pub fn formatted(&self) -> String {
        match self.person_type {
            PersonType::Individual => individual_id::format(&self.digits),
            PersonType::Organization => organization_id::format(&self.digits),
        }
    }
}

/// Validate and normalize a raw identifier under the declared person type.
///
/// Masks are stripped first, so `"123.456.789-09"` and `"12345678909"`
/// produce the same identifier.
pub fn validate_identifier(
    raw: &str,
    person_type: PersonType,
) -> Result<NationalIdentifier, IdentifierError> {
    let digits = digits_only(raw);
    let digits = match person_type {
        PersonType::Individual => individual_id::validate(digits)?,
        PersonType::Organization => organization_id::validate(digits)?,
    };
    Ok(NationalIdentifier {
        person_type,
        digits,
    })
}

/// Build a valid identifier from its leading digits by computing both check digits.
///
/// `base` must normalize to 9 digits for an individual or 12 for an
/// organization. The result still passes through [`validate_identifier`],
/// so repeated-digit bases are rejected.
pub fn append_check_digits(
    base: &str,
    person_type: PersonType,
) -> Result<NationalIdentifier, IdentifierError> {
    let base = digits_only(base);
    let expected = person_type.identifier_len() - 2;
    if base.len() != expected {
        return Err(IdentifierError::Structural {
            person_type,
            expected,
            got: base.len(),
        });
    }

    let mut digits = to_digit_values(&base);
    let (first_weights, second_weights) = match person_type {
        PersonType::Individual => (individual_id::FIRST_WEIGHTS, individual_id::SECOND_WEIGHTS),
        PersonType::Organization => (
            organization_id::FIRST_WEIGHTS,
            organization_id::SECOND_WEIGHTS,
        ),
    };
    digits.push(mod11_check_digit(&digits, first_weights));
    digits.push(mod11_check_digit(&digits, second_weights));

    let full: String = digits
        .iter()
        .map(|d| char::from(b'0' + *d as u8))
        .collect();
    validate_identifier(&full, person_type)
}

/// Mod-11 check digit over `digits[..weights.len()]`.
///
/// `r = Σ digit·weight mod 11`; the check digit is 0 when `r < 2`, else `11 - r`.
pub(crate) fn mod11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Numeric values of an all-digit string.
pub(crate) fn to_digit_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// True when every character equals the first one.
pub(crate) fn is_repeated_sequence(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Check both trailing digits of `digits` against the two weight tables.
pub(crate) fn check_digits_match(
    digits: &str,
    first_weights: &[u32],
    second_weights: &[u32],
) -> bool {
    let values = to_digit_values(digits);
    let first_pos = first_weights.len();
    let second_pos = second_weights.len();

    values.get(first_pos) == Some(&mod11_check_digit(&values, first_weights))
        && values.get(second_pos) == Some(&mod11_check_digit(&values, second_weights))
}

// Serde support - serialize as canonical digits
impl Serialize for NationalIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.digits.serialize(serializer)
    }
}

// Display support
impl fmt::Display for NationalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}
