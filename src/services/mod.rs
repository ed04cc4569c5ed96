//! Application service layer.
//!
//! Services contain business logic and orchestrate the validation facade,
//! the repositories and the clock. They are the boundary that callers such
//! as the binary talk to.

mod member_service;

pub use member_service::{MemberService, MemberServiceImpl};
