//! Organization member role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a member can hold within an organization.
///
/// The variants are persisted and serialized verbatim (`"Admin"`,
/// `"User"`) to stay wire- and storage-compatible with the original
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role")]
pub enum MemberRole {
    /// Created the organization; full control.
    Admin,
    /// Invited member.
    User,
}

impl MemberRole {
    /// Return the role as its canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = tokenhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(tokenhub_core::AppError::validation(format!(
                "Invalid member role: '{s}'. Expected one of: Admin, User"
            ))),
        }
    }
}
