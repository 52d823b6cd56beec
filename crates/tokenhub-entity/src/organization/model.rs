//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An organization that owns assets and has members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique organization identifier.
    pub id: Uuid,
    /// Organization display name.
    pub name: String,
    /// Public URL of the uploaded logo.
    pub logo: String,
    /// Email of the creating user.
    pub admin: String,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
    /// When the organization was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new organization, with the logo upload
/// already resolved to a public URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganization {
    /// Organization display name.
    pub name: String,
    /// Public URL of the uploaded logo.
    pub logo: String,
    /// Email of the creating user; also becomes the Admin member.
    pub admin: String,
}
