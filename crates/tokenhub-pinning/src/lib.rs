//! # tokenhub-pinning
//!
//! Client for the content-addressed pinning service (Pinata protocol).
//! Pins file and JSON payloads and resolves content hashes to public
//! gateway URLs.

pub mod client;

pub use client::{PinReceipt, PinningClient};
