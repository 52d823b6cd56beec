//! # tokenhub-core
//!
//! Core crate for TokenHub. Contains configuration schemas, the object
//! storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TokenHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
