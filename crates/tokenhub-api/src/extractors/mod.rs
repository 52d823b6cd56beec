//! Request decoding helpers shared across handlers.

pub mod multipart;
pub mod path;

pub use multipart::{read_file, read_text};
pub use path::require_non_empty;
