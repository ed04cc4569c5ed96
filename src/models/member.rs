//! Member models: incoming requests, the canonical record, the stored entity
//! and its read-side view.

use crate::domain::{
    completed_years, Amount, EmailAddress, MemberName, NationalIdentifier, PersonType, PhoneKind,
    PhoneNumber,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw payload for registering a new member.
///
/// Strings arrive as the user typed them (masks, spaces, mixed case); the
/// validation facade turns them into a [`MemberRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateMemberRequest {
    pub name: String,
    pub person_type: PersonType,
    pub identifier: String,
    /// Birth date for individuals, founding date for organizations.
    pub reference_date: NaiveDate,
    /// Declared income (individuals) or revenue (organizations).
    pub amount: Decimal,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Raw payload for a partial update. Unset fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub person_type: Option<PersonType>,
    pub identifier: Option<String>,
    pub reference_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub phone: Option<String>,
    /// `Some("")` clears the stored email.
    pub email: Option<String>,
}

impl UpdateMemberRequest {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.person_type.is_none()
            && self.identifier.is_none()
            && self.reference_date.is_none()
            && self.amount.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

/// A fully validated member, ready to hand to the repository.
///
/// The person type is read from the identifier, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRecord {
    pub name: MemberName,
    pub identifier: NationalIdentifier,
    pub reference_date: NaiveDate,
    pub amount: Amount,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
}

impl MemberRecord {
    pub fn person_type(&self) -> PersonType {
        self.identifier.person_type()
    }
}

/// Validated subset of fields to change on an existing member.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberChanges {
    pub name: Option<MemberName>,
    /// Carries the (possibly new) person type along with the digits.
    pub identifier: Option<NationalIdentifier>,
    pub reference_date: Option<NaiveDate>,
    pub amount: Option<Amount>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<EmailAddress>,
}

impl MemberChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.identifier.is_none()
            && self.reference_date.is_none()
            && self.amount.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

/// A registered member as held by the repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: Uuid,
    pub name: MemberName,
    pub identifier: NationalIdentifier,
    pub reference_date: NaiveDate,
    pub amount: Amount,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the member is soft-deleted.
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Create a new member from a validated record.
    pub fn from_record(id: Uuid, record: MemberRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: record.name,
            identifier: record.identifier,
            reference_date: record.reference_date,
            amount: record.amount,
            phone: record.phone,
            email: record.email,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn person_type(&self) -> PersonType {
        self.identifier.person_type()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply validated changes, bumping `updated_at`.
    pub fn apply(&mut self, changes: MemberChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(identifier) = changes.identifier {
            self.identifier = identifier;
        }
        if let Some(reference_date) = changes.reference_date {
            self.reference_date = reference_date;
        }
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        self.updated_at = now;
    }
}

/// Read-side view of a member, with display formatting applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub name: String,
    pub identifier: String,
    pub identifier_formatted: String,
    pub person_type: PersonType,
    pub person_type_label: String,
    pub reference_date: NaiveDate,
    /// Age of the person, or age of the company, in completed years.
    pub years_since_reference: u32,
    pub amount: Decimal,
    pub phone: String,
    pub phone_formatted: String,
    pub phone_kind: PhoneKind,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MemberResponse {
    pub fn from_member(member: &Member, today: NaiveDate) -> Self {
        let person_type = member.person_type();
        Self {
            id: member.id,
            name: member.name.as_str().to_string(),
            identifier: member.identifier.as_str().to_string(),
            identifier_formatted: member.identifier.formatted(),
            person_type,
            person_type_label: person_type.label().to_string(),
            reference_date: member.reference_date,
            years_since_reference: completed_years(member.reference_date, today),
            amount: member.amount.value(),
            phone: member.phone.as_str().to_string(),
            phone_formatted: member.phone.formatted(),
            phone_kind: member.phone.kind(),
            email: member.email.as_option().map(str::to_string),
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

/// Filters for listing members.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MemberFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Identifier in any mask; compared on digits.
    pub identifier: Option<String>,
    pub person_type: Option<PersonType>,
}
