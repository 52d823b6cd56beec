//! Organization membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::MemberRole;

/// A user's role-scoped association with an organization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique membership identifier.
    pub id: Uuid,
    /// Member email address.
    pub email: String,
    /// Role within the organization.
    pub role: MemberRole,
    /// Organization this membership belongs to. The wire name `orgid`
    /// matches the original public format; no foreign-key constraint is
    /// enforced.
    #[serde(rename = "orgid")]
    pub org_id: Uuid,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
    /// When the membership was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    /// Member email address.
    pub email: String,
    /// Assigned role.
    pub role: MemberRole,
    /// Owning organization id.
    pub org_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_id_wire_name() {
        let member = Member {
            id: Uuid::nil(),
            email: "a@b.c".to_string(),
            role: MemberRole::User,
            org_id: Uuid::nil(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&member).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("orgid"));
        assert!(!obj.contains_key("orgId"));
        assert_eq!(obj.get("role").and_then(|v| v.as_str()), Some("User"));
    }
}
