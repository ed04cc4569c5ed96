//! Member validation facade.
//!
//! Runs every field validator over a create or update payload and either
//! returns canonical data or the complete, ordered list of field errors.
//! Each field stops at its own first failure; fields never block each other.
//!
//! The facade performs no I/O. Duplicate detection is delegated to a caller
//! supplied predicate, and "today" is passed in explicitly.

use crate::domain::{
    validate_identifier, validate_reference_date, Amount, EmailAddress, Field, FieldError,
    FieldErrorKind, MemberName, NationalIdentifier, PhoneNumber,
};
use crate::models::{CreateMemberRequest, Member, MemberChanges, MemberRecord, UpdateMemberRequest};
use chrono::NaiveDate;

/// Accumulates field errors in the order fields are checked.
#[derive(Debug, Default)]
struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record the error of a failed check, returning the value of a passed one.
    fn check<T, E>(&mut self, field: Field, result: Result<T, E>) -> Option<T>
    where
        E: Into<FieldErrorKind>,
    {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.0.push(FieldError::new(field, err));
                None
            }
        }
    }

    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

/// Validate a create payload into a [`MemberRecord`].
///
/// `is_registered` is asked only about structurally valid identifiers; any
/// existing registration is reported as a duplicate.
///
/// # Errors
///
/// Every failing field contributes one [`FieldError`], in the order name,
/// identifier, phone, email, reference date, amount.
pub fn validate_member<F>(
    request: &CreateMemberRequest,
    today: NaiveDate,
    is_registered: F,
) -> Result<MemberRecord, Vec<FieldError>>
where
    F: Fn(&NationalIdentifier) -> bool,
{
    let mut errors = FieldErrors::default();

    let name = errors.check(Field::Name, MemberName::new(&request.name));

    let identifier = errors.check(
        Field::Identifier,
        validate_identifier(&request.identifier, request.person_type),
    );
    if let Some(identifier) = &identifier {
        if is_registered(identifier) {
            errors.push(FieldError::duplicate_identifier(identifier.as_str()));
        }
    }

    let phone = errors.check(Field::Phone, PhoneNumber::new(&request.phone));
    let email = errors.check(Field::Email, EmailAddress::new(request.email.as_deref()));

    let reference_date = errors
        .check(
            Field::ReferenceDate,
            validate_reference_date(request.reference_date, request.person_type, today),
        )
        .map(|()| request.reference_date);

    let amount = errors.check(Field::Amount, Amount::new(request.amount));

    match (name, identifier, phone, email, reference_date, amount) {
        (Some(name), Some(identifier), Some(phone), Some(email), Some(reference_date), Some(amount))
            if errors.is_empty() =>
        {
            Ok(MemberRecord {
                name,
                identifier,
                reference_date,
                amount,
                phone,
                email,
            })
        }
        _ => Err(errors.into_inner()),
    }
}

/// Validate a partial update against the stored member.
///
/// Only the fields present in `request` are validated. The effective person
/// type is the requested one, falling back to the stored one:
///
/// - a provided identifier is validated under the effective type, and the
///   duplicate predicate is asked only when it differs from the stored one;
/// - a type change without a new identifier re-validates the stored
///   identifier under the new type;
/// - a provided reference date is checked under the effective type; a type
///   change without a new date re-checks the stored date under the new type.
///   A stored date is not re-checked when unrelated fields change.
///
/// # Errors
///
/// Same field-scoped collection as [`validate_member`].
pub fn validate_member_update<F>(
    existing: &Member,
    request: &UpdateMemberRequest,
    today: NaiveDate,
    is_registered: F,
) -> Result<MemberChanges, Vec<FieldError>>
where
    F: Fn(&NationalIdentifier) -> bool,
{
    let mut errors = FieldErrors::default();
    let mut changes = MemberChanges::default();

    let person_type = request.person_type.unwrap_or_else(|| existing.person_type());

    if let Some(raw) = &request.name {
        changes.name = errors.check(Field::Name, MemberName::new(raw));
    }

    match &request.identifier {
        Some(raw) => {
            let identifier = errors.check(Field::Identifier, validate_identifier(raw, person_type));
            if let Some(identifier) = &identifier {
                if *identifier != existing.identifier && is_registered(identifier) {
                    errors.push(FieldError::duplicate_identifier(identifier.as_str()));
                }
            }
            changes.identifier = identifier;
        }
        None if person_type != existing.person_type() => {
            changes.identifier = errors.check(
                Field::Identifier,
                validate_identifier(existing.identifier.as_str(), person_type),
            );
        }
        None => {}
    }

    if let Some(raw) = &request.phone {
        changes.phone = errors.check(Field::Phone, PhoneNumber::new(raw));
    }

    if let Some(raw) = &request.email {
        changes.email = errors.check(Field::Email, EmailAddress::new(Some(raw)));
    }

    match request.reference_date {
        Some(date) => {
            changes.reference_date = errors
                .check(
                    Field::ReferenceDate,
                    validate_reference_date(date, person_type, today),
                )
                .map(|()| date);
        }
        None if person_type != existing.person_type() => {
            errors.check(
                Field::ReferenceDate,
                validate_reference_date(existing.reference_date, person_type, today),
            );
        }
        None => {}
    }

    if let Some(value) = request.amount {
        changes.amount = errors.check(Field::Amount, Amount::new(value));
    }

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors.into_inner())
    }
}
