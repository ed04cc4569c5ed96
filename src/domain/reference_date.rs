//! Business rules on the reference date.
//!
//! The reference date is a birth date for individuals and a founding date
//! for organizations. "Today" is always passed in so the rules stay pure.

use super::errors::DateError;
use super::person_type::PersonType;
use chrono::NaiveDate;

/// Minimum age, in completed years, for an individual member.
pub const MINIMUM_AGE: u32 = 18;

/// Validate a reference date against `today` for the given person type.
///
/// - The date may not be after `today` (both kinds).
/// - An individual must be at least [`MINIMUM_AGE`] completed years old.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use member_registry::domain::{validate_reference_date, PersonType};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let birth = NaiveDate::from_ymd_opt(2006, 6, 15).unwrap();
/// assert!(validate_reference_date(birth, PersonType::Individual, today).is_ok());
/// ```
pub fn validate_reference_date(
    date: NaiveDate,
    person_type: PersonType,
    today: NaiveDate,
) -> Result<(), DateError> {
    if date > today {
        return Err(DateError::FutureDate { date, today });
    }

    match person_type {
        PersonType::Individual => {
            let age = completed_years(date, today);
            if age < MINIMUM_AGE {
                return Err(DateError::MinimumAge {
                    age,
                    minimum: MINIMUM_AGE,
                });
            }
            Ok(())
        }
        PersonType::Organization => Ok(()),
    }
}

/// Whole years elapsed from `date` to `today`; 0 when `date` is in the future.
pub fn completed_years(date: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(date).unwrap_or(0)
}
