use async_trait::async_trait;
use chrono::Utc;
use member_registry::error::{RepositoryError, RepositoryResult};
use member_registry::models::{Member, MemberChanges, MemberFilter, MemberRecord, Page};
use member_registry::repositories::MemberRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Mock member repository for testing.
///
/// Keeps members in a plain map, tracks method calls for verification and
/// can be told to fail every call with a storage error.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMemberRepository {
    members: Arc<Mutex<HashMap<Uuid, Member>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failure: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockMemberRepository {
    /// Create a new empty MockMemberRepository.
    pub fn new() -> Self {
        Self {
            members: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a member directly, bypassing validation.
    pub fn add_member(&self, member: Member) {
        let mut members = self.members.lock().unwrap();
        members.insert(member.id, member);
    }

    /// Make every subsequent call fail with a storage error.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    /// Number of stored members, deleted ones included.
    pub fn stored(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) -> RepositoryResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(RepositoryError::Storage(message.clone())),
            None => Ok(()),
        }
    }

    fn find_active(&self, digits: &str) -> Option<Member> {
        let members = self.members.lock().unwrap();
        members
            .values()
            .find(|m| !m.is_deleted() && m.identifier.as_str() == digits)
            .cloned()
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn create(&self, record: MemberRecord) -> RepositoryResult<Member> {
        self.track_call("create")?;

        if self.find_active(record.identifier.as_str()).is_some() {
            return Err(RepositoryError::DuplicateIdentifier(
                record.identifier.as_str().to_string(),
            ));
        }

        let member = Member::from_record(Uuid::new_v4(), record, Utc::now());
        self.add_member(member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>> {
        self.track_call("find_by_id")?;

        let members = self.members.lock().unwrap();
        Ok(members.get(&id).filter(|m| !m.is_deleted()).cloned())
    }

    async fn find_by_identifier(&self, digits: &str) -> RepositoryResult<Option<Member>> {
        self.track_call("find_by_identifier")?;
        Ok(self.find_active(digits))
    }

    async fn exists_by_identifier(&self, digits: &str) -> RepositoryResult<bool> {
        self.track_call("exists_by_identifier")?;
        Ok(self.find_active(digits).is_some())
    }

    async fn update(&self, id: Uuid, changes: MemberChanges) -> RepositoryResult<Member> {
        self.track_call("update")?;

        let mut members = self.members.lock().unwrap();
        let member = members
            .get_mut(&id)
            .filter(|m| !m.is_deleted())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        member.apply(changes, Utc::now());
        Ok(member.clone())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        self.track_call("delete")?;

        let mut members = self.members.lock().unwrap();
        let member = members
            .get_mut(&id)
            .filter(|m| !m.is_deleted())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        member.deleted_at = Some(Utc::now());
        Ok(())
    }

    async fn list(
        &self,
        filter: &MemberFilter,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Page<Member>> {
        self.track_call("list")?;

        let members = self.members.lock().unwrap();
        let mut result: Vec<Member> = members
            .values()
            .filter(|m| !m.is_deleted())
            .filter(|m| filter.person_type.map_or(true, |t| m.person_type() == t))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));

        let total = result.len();
        let items = result.into_iter().skip(offset).take(limit).collect();
        Ok(Page::new(items, total, limit, offset))
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.track_call("count")?;

        let members = self.members.lock().unwrap();
        Ok(members.values().filter(|m| !m.is_deleted()).count())
    }
}
