//! Object store provider implementations.

pub mod firebase;
pub mod local;

pub use firebase::FirebaseObjectStore;
pub use local::LocalObjectStore;
