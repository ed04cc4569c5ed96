//! Member service layer.
//!
//! Orchestrates the validation facade, the repository and the clock for
//! member onboarding, updates and lookups.

use crate::clock::Clock;
use crate::domain::normalize::digits_only;
use crate::domain::{validate_identifier, FieldError, NationalIdentifier};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    CreateMemberRequest, MemberFilter, MemberResponse, Page, UpdateMemberRequest,
};
use crate::repositories::MemberRepository;
use crate::validation::{validate_member, validate_member_update};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Member service trait for business operations.
#[async_trait]
pub trait MemberService: Send + Sync {
    /// Validate and register a new member.
    async fn create(&self, request: CreateMemberRequest) -> ServiceResult<MemberResponse>;

    /// Validate and apply a partial update.
    ///
    /// An empty request is a no-op that returns the current record.
    async fn update(&self, id: Uuid, request: UpdateMemberRequest)
        -> ServiceResult<MemberResponse>;

    /// Get an active member by id.
    async fn get(&self, id: Uuid) -> ServiceResult<MemberResponse>;

    /// Look up an active member by identifier, in any mask.
    async fn find_by_identifier(&self, identifier: &str)
        -> ServiceResult<Option<MemberResponse>>;

    /// List active members, ordered by name.
    ///
    /// `page` is 1-based; 0 is treated as 1. `per_page` falls back to the
    /// default when absent or zero and is clamped to the maximum.
    async fn list(
        &self,
        filter: MemberFilter,
        page: Option<usize>,
        per_page: Option<usize>,
    ) -> ServiceResult<Page<MemberResponse>>;

    /// Soft-delete a member.
    async fn delete(&self, id: Uuid) -> ServiceResult<()>;

    /// Number of active members.
    async fn count(&self) -> ServiceResult<usize>;
}

/// Default implementation of MemberService.
pub struct MemberServiceImpl {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
    default_page_size: usize,
    max_page_size: usize,
}

impl MemberServiceImpl {
    /// Create a new member service.
    pub fn new(
        repository: Arc<dyn MemberRepository>,
        clock: Arc<dyn Clock>,
        default_page_size: usize,
        max_page_size: usize,
    ) -> Self {
        Self {
            repository,
            clock,
            default_page_size: default_page_size.max(1),
            max_page_size: max_page_size.max(default_page_size).max(1),
        }
    }

    /// Ask the repository whether a structurally valid identifier is taken.
    ///
    /// Returns `false` for identifiers that do not validate; the facade
    /// reports those itself.
    async fn is_registered(&self, candidate: Option<NationalIdentifier>) -> ServiceResult<bool> {
        match candidate {
            Some(identifier) => Ok(self
                .repository
                .exists_by_identifier(identifier.as_str())
                .await?),
            None => Ok(false),
        }
    }

    fn page_window(&self, page: Option<usize>, per_page: Option<usize>) -> (usize, usize) {
        let limit = match per_page {
            Some(0) | None => self.default_page_size,
            Some(n) => n.min(self.max_page_size),
        };
        let page = page.unwrap_or(1).max(1);
        (limit, (page - 1).saturating_mul(limit))
    }

    fn rejected(&self, errors: Vec<FieldError>) -> ServiceError {
        let err = ServiceError::Validation(errors);
        warn!(conflict = err.is_conflict(), "Rejected member payload: {}", err);
        err
    }
}

#[async_trait]
impl MemberService for MemberServiceImpl {
    async fn create(&self, request: CreateMemberRequest) -> ServiceResult<MemberResponse> {
        let today = self.clock.today();

        let candidate = validate_identifier(&request.identifier, request.person_type).ok();
        let registered = self.is_registered(candidate).await?;

        let record = validate_member(&request, today, |_| registered)
            .map_err(|errors| self.rejected(errors))?;

        let member = self.repository.create(record).await.map_err(|e| {
            let err = ServiceError::from(e);
            if err.is_conflict() {
                warn!("Identifier registered concurrently: {}", err);
            }
            err
        })?;

        info!(id = %member.id, person_type = %member.person_type(), "Member registered");
        Ok(MemberResponse::from_member(&member, today))
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        let today = self.clock.today();

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        if request.is_empty() {
            debug!(id = %id, "Empty update, nothing to do");
            return Ok(MemberResponse::from_member(&existing, today));
        }

        let person_type = request
            .person_type
            .unwrap_or_else(|| existing.person_type());
        let candidate = request
            .identifier
            .as_deref()
            .and_then(|raw| validate_identifier(raw, person_type).ok())
            .filter(|identifier| *identifier != existing.identifier);
        let registered = self.is_registered(candidate).await?;

        let changes = validate_member_update(&existing, &request, today, |_| registered)
            .map_err(|errors| self.rejected(errors))?;

        if changes.is_empty() {
            return Ok(MemberResponse::from_member(&existing, today));
        }

        let member = self.repository.update(id, changes).await?;

        info!(id = %member.id, "Member updated");
        Ok(MemberResponse::from_member(&member, today))
    }

    async fn get(&self, id: Uuid) -> ServiceResult<MemberResponse> {
        let member = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        Ok(MemberResponse::from_member(&member, self.clock.today()))
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> ServiceResult<Option<MemberResponse>> {
        let today = self.clock.today();
        let member = self
            .repository
            .find_by_identifier(&digits_only(identifier))
            .await?;

        Ok(member.map(|m| MemberResponse::from_member(&m, today)))
    }

    async fn list(
        &self,
        filter: MemberFilter,
        page: Option<usize>,
        per_page: Option<usize>,
    ) -> ServiceResult<Page<MemberResponse>> {
        let today = self.clock.today();
        let (limit, offset) = self.page_window(page, per_page);
        debug!(limit, offset, "Listing members");

        let members = self.repository.list(&filter, limit, offset).await?;
        Ok(members.map(|m| MemberResponse::from_member(&m, today)))
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(id = %id, "Member deleted");
        Ok(())
    }

    async fn count(&self) -> ServiceResult<usize> {
        Ok(self.repository.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::repositories::InMemoryMemberRepository;
    use chrono::NaiveDate;

    fn service(default_page_size: usize, max_page_size: usize) -> MemberServiceImpl {
        MemberServiceImpl::new(
            Arc::new(InMemoryMemberRepository::new()),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())),
            default_page_size,
            max_page_size,
        )
    }

    #[test]
    fn test_page_window_defaults_and_clamps() {
        let service = service(15, 100);
        assert_eq!(service.page_window(None, None), (15, 0));
        assert_eq!(service.page_window(Some(0), Some(0)), (15, 0));
        assert_eq!(service.page_window(Some(3), Some(10)), (10, 20));
        assert_eq!(service.page_window(Some(2), Some(500)), (100, 100));
    }

    #[test]
    fn test_new_keeps_sizes_consistent() {
        let service = service(0, 0);
        assert_eq!(service.page_window(None, Some(50)), (1, 0));
    }

    #[tokio::test]
    async fn test_get_unknown_member() {
        let service = service(15, 100);
        let id = Uuid::new_v4();
        assert_eq!(
            service.get(id).await,
            Err(ServiceError::NotFound(id.to_string()))
        );
    }
}
