//! Data models for registry members.
//!
//! This module contains the request payloads accepted by the registry, the
//! canonical record produced by validation, the stored member entity and the
//! formatted read-side view.

pub mod member;
pub mod page;

pub use member::{
    CreateMemberRequest, Member, MemberChanges, MemberFilter, MemberRecord, MemberResponse,
    UpdateMemberRequest,
};
pub use page::Page;
