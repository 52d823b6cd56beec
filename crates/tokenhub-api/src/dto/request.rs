//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to run the tokenization pipeline for an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeRequest {
    /// Asset to tokenize.
    pub id: Uuid,
    /// Wallet address credited as the token's creator.
    pub wallet_address: String,
}

/// Request to record a completed mint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTokenizationRequest {
    /// Asset that was minted.
    pub id: Uuid,
    /// On-chain token id to record.
    pub token_id: i64,
}

/// Request to enroll an email into an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteRequest {
    /// Email to enroll with the User role.
    pub email: String,
}

/// Request to remove an email's membership from an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Email whose membership is removed.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_request_wire_names() {
        let req: TokenizeRequest = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000000","walletAddress":"0xABC"}"#,
        )
        .unwrap();
        assert_eq!(req.wallet_address, "0xABC");

        let req: CompleteTokenizationRequest = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000000","tokenId":42}"#,
        )
        .unwrap();
        assert_eq!(req.token_id, 42);
    }
}
