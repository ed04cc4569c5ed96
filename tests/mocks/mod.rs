mod mock_member_repository;

pub use mock_member_repository::MockMemberRepository;
