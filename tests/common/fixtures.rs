//! Sample member payloads.
//!
//! Identifiers are generated from a base with valid check digits appended,
//! and passed in their masked form the way a user would type them.

use chrono::NaiveDate;
use member_registry::{append_check_digits, CreateMemberRequest, PersonType};
use rust_decimal::Decimal;

/// Masked CPF built from a 9-digit base.
#[allow(dead_code)]
pub fn cpf(base: &str) -> String {
    append_check_digits(base, PersonType::Individual)
        .unwrap()
        .formatted()
}

/// Masked CNPJ built from a 12-digit base.
#[allow(dead_code)]
pub fn cnpj(base: &str) -> String {
    append_check_digits(base, PersonType::Organization)
        .unwrap()
        .formatted()
}

/// A valid adult individual.
#[allow(dead_code)]
pub fn individual_request(name: &str, base: &str) -> CreateMemberRequest {
    CreateMemberRequest {
        name: name.to_string(),
        person_type: PersonType::Individual,
        identifier: cpf(base),
        reference_date: NaiveDate::from_ymd_opt(1990, 5, 10).unwrap(),
        amount: Decimal::new(450000, 2),
        phone: "(11) 99999-9999".to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
    }
}

/// A valid organization founded last year.
#[allow(dead_code)]
pub fn organization_request(name: &str, base: &str) -> CreateMemberRequest {
    CreateMemberRequest {
        name: name.to_string(),
        person_type: PersonType::Organization,
        identifier: cnpj(base),
        reference_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        amount: Decimal::new(125_000_000, 2),
        phone: "(21) 3333-4444".to_string(),
        email: None,
    }
}
