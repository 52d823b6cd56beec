//! Asset services — submission, retrieval, and the tokenization pipeline.

pub mod service;
pub mod tokenize;

pub use service::{AssetService, AssetSubmission};
pub use tokenize::TokenizeService;
