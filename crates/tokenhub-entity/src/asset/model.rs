//! Asset entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tokenizable business/equity record with an associated image.
///
/// JSON field names follow the original public wire format (camelCase,
/// with `map` and `values` kept verbatim); existing API consumers depend
/// on them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Asset display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Percentage of equity offered.
    pub equity: i32,
    /// Amount of funding sought.
    pub seeking: i32,
    /// Physical location of the asset.
    pub location: String,
    /// Business category.
    pub category: String,
    /// Total valuation.
    pub valuation: i32,
    /// Price per share.
    pub share_price: i32,
    /// Identifier of the submitting user.
    pub creator: String,
    /// Identifier of the owning organization (non-referential).
    pub owner: String,
    /// Public URL of the primary image.
    pub img_url: String,
    /// Public URL of the optional secondary "map" image.
    #[serde(rename = "map")]
    pub map_url: Option<String>,
    /// Ordered names of user-defined custom attributes.
    pub field_names: Vec<String>,
    /// Ordered values of user-defined custom attributes; parallel to
    /// `field_names`.
    #[sqlx(rename = "field_values")]
    pub values: Vec<String>,
    /// On-chain token id; 0 until tokenization completes.
    pub token_id: i64,
    /// When the asset was created.
    pub created_at: DateTime<Utc>,
    /// When the asset was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    /// Check whether a completed tokenization has been recorded.
    pub fn is_tokenized(&self) -> bool {
        self.token_id != 0
    }
}

/// Data required to create a new asset, with numeric fields already
/// parsed and image uploads already resolved to public URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    /// Asset display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Percentage of equity offered.
    pub equity: i32,
    /// Amount of funding sought.
    pub seeking: i32,
    /// Physical location of the asset.
    pub location: String,
    /// Business category.
    pub category: String,
    /// Total valuation.
    pub valuation: i32,
    /// Price per share.
    pub share_price: i32,
    /// Identifier of the submitting user.
    pub creator: String,
    /// Identifier of the owning organization.
    pub owner: String,
    /// Public URL of the uploaded primary image.
    pub img_url: String,
    /// Public URL of the uploaded secondary image, if one was submitted.
    pub map_url: Option<String>,
    /// Ordered custom attribute names.
    pub field_names: Vec<String>,
    /// Ordered custom attribute values.
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Asset {
        Asset {
            id: Uuid::nil(),
            name: "Vineyard".to_string(),
            description: "A vineyard".to_string(),
            equity: 5,
            seeking: 10,
            location: "Napa".to_string(),
            category: "Agriculture".to_string(),
            valuation: 100,
            share_price: 2,
            creator: "user-1".to_string(),
            owner: "org-1".to_string(),
            img_url: "https://example.com/o/a?alt=media&token=t".to_string(),
            map_url: None,
            field_names: vec!["Soil".to_string()],
            values: vec!["Volcanic".to_string()],
            token_id: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "id",
            "name",
            "equity",
            "sharePrice",
            "imgUrl",
            "map",
            "fieldNames",
            "values",
            "tokenId",
            "owner",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
        assert!(!obj.contains_key("share_price"));
        assert!(!obj.contains_key("mapUrl"));
    }

    #[test]
    fn test_is_tokenized() {
        let mut asset = sample();
        assert!(!asset.is_tokenized());
        asset.token_id = 42;
        assert!(asset.is_tokenized());
    }
}
