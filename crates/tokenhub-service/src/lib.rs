//! # tokenhub-service
//!
//! Business logic service layer for TokenHub. Each service orchestrates
//! repositories, object storage, and the pinning client to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod asset;
pub mod organization;
pub mod upload;

pub use asset::{AssetService, AssetSubmission, TokenizeService};
pub use organization::{OrganizationService, OrganizationSubmission};
pub use upload::FileUpload;
