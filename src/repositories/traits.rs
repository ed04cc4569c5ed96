use crate::error::RepositoryResult;
use crate::models::{Member, MemberChanges, MemberFilter, MemberRecord, Page};
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for registered members.
///
/// Implementations own the uniqueness guarantee on identifiers: `create` and
/// `update` must reject a colliding identifier atomically with the write,
/// returning `RepositoryError::DuplicateIdentifier`. Soft-deleted members
/// are invisible to every read.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Store a new member from a validated record.
    async fn create(&self, record: MemberRecord) -> RepositoryResult<Member>;

    /// Retrieve an active member by id.
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>>;

    /// Retrieve an active member by canonical identifier digits.
    async fn find_by_identifier(&self, digits: &str) -> RepositoryResult<Option<Member>>;

    /// Check whether an active member holds these identifier digits.
    async fn exists_by_identifier(&self, digits: &str) -> RepositoryResult<bool>;

    /// Apply validated changes to an active member.
    async fn update(&self, id: Uuid, changes: MemberChanges) -> RepositoryResult<Member>;

    /// Soft-delete an active member.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// List active members matching the filter, ordered by name.
    async fn list(
        &self,
        filter: &MemberFilter,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Page<Member>>;

    /// Number of active members.
    async fn count(&self) -> RepositoryResult<usize>;
}
