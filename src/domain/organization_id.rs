//! CNPJ rules: the 14-digit organization registration identifier.

use super::errors::IdentifierError;
use super::identifier::{check_digits_match, is_repeated_sequence};
use super::person_type::PersonType;

/// Weights for the first check digit, applied to positions 0..12.
pub(crate) const FIRST_WEIGHTS: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied to positions 0..13
/// (including the first check digit).
pub(crate) const SECOND_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const LEN: usize = 14;

/// Validate already-normalized digits as a CNPJ.
pub(crate) fn validate(digits: String) -> Result<String, IdentifierError> {
    if digits.len() != LEN {
        return Err(IdentifierError::Structural {
            person_type: PersonType::Organization,
            expected: LEN,
            got: digits.len(),
        });
    }

    if is_repeated_sequence(&digits) {
        return Err(IdentifierError::RepeatedDigits {
            person_type: PersonType::Organization,
            digits,
        });
    }

    if !check_digits_match(&digits, FIRST_WEIGHTS, SECOND_WEIGHTS) {
        return Err(IdentifierError::Checksum {
            person_type: PersonType::Organization,
            digits,
        });
    }

    Ok(digits)
}

/// `XX.XXX.XXX/XXXX-XX`
pub(crate) fn format(digits: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}
