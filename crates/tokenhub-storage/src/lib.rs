//! # tokenhub-storage
//!
//! Object storage provider implementations for TokenHub, plus the
//! [`MediaStore`] facade that names objects and synthesizes their public
//! download URLs.

pub mod media;
pub mod providers;

pub use media::{MediaStore, StoredObject};
