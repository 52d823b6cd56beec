//! Core traits defined in `tokenhub-core` and implemented by other crates.

pub mod object_store;

pub use object_store::ObjectStore;
