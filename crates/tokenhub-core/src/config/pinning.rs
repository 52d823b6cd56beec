//! Pinning service configuration.

use serde::{Deserialize, Serialize};

/// Content-addressed pinning service configuration (Pinata protocol).
///
/// Credentials have no defaults on purpose: they must be supplied via the
/// configuration overlay or `TOKENHUB__PINNING__API_KEY` /
/// `TOKENHUB__PINNING__SECRET_API_KEY` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinningConfig {
    /// Pin endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Public gateway base prepended to content hashes.
    #[serde(default = "default_gateway_base")]
    pub gateway_base: String,
    /// API key sent as the `pinata_api_key` header.
    #[serde(default)]
    pub api_key: String,
    /// API secret sent as the `pinata_secret_api_key` header.
    #[serde(default)]
    pub secret_api_key: String,
}

impl Default for PinningConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            gateway_base: default_gateway_base(),
            api_key: String::new(),
            secret_api_key: String::new(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.pinata.cloud/pinning/pinFileToIPFS".to_string()
}

fn default_gateway_base() -> String {
    "https://ipfs.io/ipfs/".to_string()
}
