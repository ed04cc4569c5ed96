//! Shared setup for integration tests.

pub mod fixtures;

use chrono::NaiveDate;
use member_registry::repositories::MemberRepository;
use member_registry::services::MemberServiceImpl;
use member_registry::FixedClock;
use std::sync::Arc;

/// The date every service under test treats as "today".
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Build a service over the given repository with a pinned clock.
#[allow(dead_code)]
pub fn service_with(repository: Arc<dyn MemberRepository>) -> MemberServiceImpl {
    MemberServiceImpl::new(repository, Arc::new(FixedClock(today())), 15, 100)
}
