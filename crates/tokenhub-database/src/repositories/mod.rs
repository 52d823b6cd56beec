//! Repository implementations for all TokenHub entities.

pub mod asset;
pub mod member;
pub mod organization;

pub use asset::AssetRepository;
pub use member::MemberRepository;
pub use organization::OrganizationRepository;
