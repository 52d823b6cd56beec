//! # tokenhub-api
//!
//! HTTP API layer for TokenHub built on Axum.
//!
//! Provides the REST endpoints, CORS/compression/trace middleware,
//! request/response DTOs, and the domain-error-to-HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorResponse};
pub use router::build_router;
pub use state::AppState;
