//! Organization services — creation, membership, and lookups.

pub mod service;

pub use service::{OrganizationService, OrganizationSubmission};
