use crate::domain::normalize::digits_only;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Member, MemberChanges, MemberFilter, MemberRecord, Page};
use crate::repositories::traits::MemberRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Store {
    members: HashMap<Uuid, Member>,
    // Identifier digits -> owner id. Soft-deleted members keep their entry,
    // like a unique column that still holds the row.
    by_identifier: HashMap<String, Uuid>,
}

/// Member repository backed by process memory.
///
/// The uniqueness check and the write happen under one write lock, so two
/// concurrent creations of the same identifier cannot both succeed. Clones
/// share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryMemberRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|e| RepositoryError::Storage(format!("store lock poisoned: {}", e)))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|e| RepositoryError::Storage(format!("store lock poisoned: {}", e)))
    }
}

fn matches_filter(member: &Member, filter: &MemberFilter) -> bool {
    if let Some(name) = &filter.name {
        let needle = name.trim().to_lowercase();
        if !member.name.as_str().to_lowercase().contains(&needle) {
            return false;
        }
    }

    if let Some(identifier) = &filter.identifier {
        let digits = digits_only(identifier);
        if !digits.is_empty() && member.identifier.as_str() != digits {
            return false;
        }
    }

    if let Some(person_type) = filter.person_type {
        if member.person_type() != person_type {
            return false;
        }
    }

    true
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create(&self, record: MemberRecord) -> RepositoryResult<Member> {
        let mut store = self.write()?;

        let digits = record.identifier.as_str().to_string();
        if store.by_identifier.contains_key(&digits) {
            return Err(RepositoryError::DuplicateIdentifier(digits));
        }

        let member = Member::from_record(Uuid::new_v4(), record, Utc::now());
        store.by_identifier.insert(digits, member.id);
        store.members.insert(member.id, member.clone());

        debug!(id = %member.id, "Stored member");
        Ok(member)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>> {
        let store = self.read()?;
        Ok(store
            .members
            .get(&id)
            .filter(|member| !member.is_deleted())
            .cloned())
    }

    async fn find_by_identifier(&self, digits: &str) -> RepositoryResult<Option<Member>> {
        let store = self.read()?;
        let digits = digits_only(digits);
        Ok(store
            .by_identifier
            .get(&digits)
            .and_then(|id| store.members.get(id))
            .filter(|member| !member.is_deleted())
            .cloned())
    }

    async fn exists_by_identifier(&self, digits: &str) -> RepositoryResult<bool> {
        Ok(self.find_by_identifier(digits).await?.is_some())
    }

    async fn update(&self, id: Uuid, changes: MemberChanges) -> RepositoryResult<Member> {
        let mut guard = self.write()?;
        let store = &mut *guard;

        let member = store
            .members
            .get_mut(&id)
            .filter(|member| !member.is_deleted())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        if let Some(identifier) = &changes.identifier {
            let new_digits = identifier.as_str();
            if new_digits != member.identifier.as_str() {
                if let Some(owner) = store.by_identifier.get(new_digits) {
                    if *owner != id {
                        return Err(RepositoryError::DuplicateIdentifier(new_digits.to_string()));
                    }
                }
                store.by_identifier.remove(member.identifier.as_str());
                store.by_identifier.insert(new_digits.to_string(), id);
            }
        }

        member.apply(changes, Utc::now());

        debug!(id = %id, "Updated member");
        Ok(member.clone())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut store = self.write()?;

        let member = store
            .members
            .get_mut(&id)
            .filter(|member| !member.is_deleted())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        member.deleted_at = Some(Utc::now());

        debug!(id = %id, "Soft-deleted member");
        Ok(())
    }

    async fn list(
        &self,
        filter: &MemberFilter,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Page<Member>> {
        let store = self.read()?;

        let mut matching: Vec<&Member> = store
            .members
            .values()
            .filter(|member| !member.is_deleted() && matches_filter(member, filter))
            .collect();
        matching.sort_by(|a, b| {
            a.name
                .as_str()
                .to_lowercase()
                .cmp(&b.name.as_str().to_lowercase())
                .then(a.created_at.cmp(&b.created_at))
        });

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(Page::new(items, total, limit, offset))
    }

    async fn count(&self) -> RepositoryResult<usize> {
        let store = self.read()?;
        Ok(store
            .members
            .values()
            .filter(|member| !member.is_deleted())
            .count())
    }
}
