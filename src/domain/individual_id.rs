//! CPF rules: the 11-digit individual taxpayer identifier.

use super::errors::IdentifierError;
use super::identifier::{check_digits_match, is_repeated_sequence};
use super::person_type::PersonType;

/// Weights for the first check digit, applied to positions 0..9.
pub(crate) const FIRST_WEIGHTS: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied to positions 0..10.
pub(crate) const SECOND_WEIGHTS: &[u32] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const LEN: usize = 11;

/// Validate already-normalized digits as a CPF.
///
/// Length is checked first; the repeated-digit and checksum steps are
/// undefined on wrong-length input and are skipped.
pub(crate) fn validate(digits: String) -> Result<String, IdentifierError> {
    if digits.len() != LEN {
        return Err(IdentifierError::Structural {
            person_type: PersonType::Individual,
            expected: LEN,
            got: digits.len(),
        });
    }

    if is_repeated_sequence(&digits) {
        return Err(IdentifierError::RepeatedDigits {
            person_type: PersonType::Individual,
            digits,
        });
    }

    if !check_digits_match(&digits, FIRST_WEIGHTS, SECOND_WEIGHTS) {
        return Err(IdentifierError::Checksum {
            person_type: PersonType::Individual,
            digits,
        });
    }

    Ok(digits)
}

/// `XXX.XXX.XXX-XX`
pub(crate) fn format(digits: &str) -> String {
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}
