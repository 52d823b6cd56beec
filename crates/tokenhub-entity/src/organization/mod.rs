//! Organization domain entities.

pub mod member;
pub mod model;
pub mod role;

pub use member::{CreateMember, Member};
pub use model::{CreateOrganization, Organization};
pub use role::MemberRole;
