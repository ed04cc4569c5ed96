//! Member persistence.

mod in_memory_member_repository;
mod traits;

pub use in_memory_member_repository::InMemoryMemberRepository;
pub use traits::MemberRepository;
