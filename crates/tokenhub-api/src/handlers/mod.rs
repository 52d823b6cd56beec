//! Route handlers organized by domain.

pub mod asset;
pub mod health;
pub mod organization;
