//! Domain value objects and business rules.
//!
//! Raw member input (tax identifiers, phone numbers, email addresses, dates,
//! amounts) is normalized and validated here. Every value object is built
//! only through its validating constructor, so holding one means holding
//! canonical, valid data.

pub mod amount;
pub mod email;
pub mod errors;
pub mod identifier;
mod individual_id;
pub mod member_name;
pub mod normalize;
mod organization_id;
pub mod person_type;
pub mod phone;
pub mod reference_date;

pub use amount::Amount;
pub use email::EmailAddress;
pub use errors::{
    AmountError, DateError, EmailBound, EmailError, ErrorKind, Field, FieldError, FieldErrorKind,
    IdentifierError, NameError, PhoneError,
};
pub use identifier::{append_check_digits, validate_identifier, NationalIdentifier};
pub use member_name::MemberName;
pub use person_type::{PersonType, UnknownPersonType};
pub use phone::{PhoneKind, PhoneNumber};
pub use reference_date::{completed_years, validate_reference_date, MINIMUM_AGE};

use rust_decimal::Decimal;

/// Validate a raw phone number. See [`PhoneNumber::new`].
pub fn validate_phone(raw: &str) -> Result<PhoneNumber, PhoneError> {
    PhoneNumber::new(raw)
}

/// Validate an optional raw email address. See [`EmailAddress::new`].
pub fn validate_email(raw: Option<&str>) -> Result<EmailAddress, EmailError> {
    EmailAddress::new(raw)
}

/// Validate the income/revenue figure. See [`Amount::new`].
pub fn validate_amount(value: Decimal) -> Result<Amount, AmountError> {
    Amount::new(value)
}
