//! Member Registry - onboarding validation for individual and organization members.
//!
//! This library validates member registration data (CPF/CNPJ tax identifiers,
//! Brazilian phone numbers, email addresses, reference dates and declared
//! amounts) and keeps validated members in a repository behind a service layer.
//!
//! # Architecture
//!
//! - **domain**: Value objects, field validators and field-scoped errors
//! - **validation**: Facade that runs every field check and collects errors
//! - **models**: Request payloads, stored members and read-side views
//! - **repositories**: Member persistence (in-memory implementation)
//! - **services**: Business operations over the repository
//! - **clock**: Source of "today" for the service layer
//! - **config**: Configuration management from environment variables
//! - **error**: Repository, service and configuration error types

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{
    append_check_digits, validate_amount, validate_email, validate_identifier, validate_phone,
    validate_reference_date, Amount, EmailAddress, ErrorKind, Field, FieldError, MemberName,
    NationalIdentifier, PersonType, PhoneKind, PhoneNumber,
};
pub use error::{ConfigError, RepositoryError, ServiceError};
pub use models::{
    CreateMemberRequest, Member, MemberFilter, MemberRecord, MemberResponse, Page,
    UpdateMemberRequest,
};
pub use repositories::{InMemoryMemberRepository, MemberRepository};
pub use services::{MemberService, MemberServiceImpl};
pub use validation::{validate_member, validate_member_update};
