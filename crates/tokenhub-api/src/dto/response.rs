//! Response DTOs.
//!
//! Success bodies are one-or-two-key envelopes named after what they
//! carry; existing clients key on these exact names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokenhub_entity::asset::Asset;
use tokenhub_entity::organization::{Member, Organization};

/// Single-asset envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetEnvelope {
    /// The asset.
    pub asset: Asset,
}

/// Asset list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsEnvelope {
    /// The assets.
    pub assets: Vec<Asset>,
}

/// Metadata URL produced by the tokenization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataUrlResponse {
    /// Gateway URL of the pinned metadata document.
    #[serde(rename = "metadataURL")]
    pub metadata_url: String,
}

/// Asset id echo for a recorded mint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteTokenizationResponse {
    /// The updated asset's id.
    pub id: Uuid,
}

/// Single-organization envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationEnvelope {
    /// The organization.
    pub organization: Organization,
}

/// Organization list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationsEnvelope {
    /// The organizations.
    pub organizations: Vec<Organization>,
}

/// Every organization alongside one user's memberships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOrganizationsResponse {
    /// All organizations, unfiltered.
    pub organizations: Vec<Organization>,
    /// The user's memberships.
    pub members: Vec<Member>,
}

/// Organization member list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersEnvelope {
    /// The members.
    pub users: Vec<Member>,
}

/// Single-membership envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberEnvelope {
    /// The created membership.
    pub member: Member,
}

/// Bare status acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Outcome label.
    pub status: String,
}

impl StatusResponse {
    /// The standard success acknowledgement.
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Dependency health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database reachability.
    pub database: String,
    /// Storage provider reachability.
    pub storage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_url_wire_name() {
        let body = MetadataUrlResponse {
            metadata_url: "https://ipfs.io/ipfs/QmX".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"metadataURL":"https://ipfs.io/ipfs/QmX"}"#
        );
    }

    #[test]
    fn test_status_success() {
        assert_eq!(
            serde_json::to_string(&StatusResponse::success()).unwrap(),
            r#"{"status":"success"}"#
        );
    }
}
