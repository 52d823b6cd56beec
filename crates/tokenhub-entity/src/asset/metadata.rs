//! NFT metadata document types.
//!
//! Assembled in memory during tokenization and uploaded to the pinning
//! service; never persisted. Field declaration order fixes the serialized
//! key order, which downstream NFT tooling depends on.

use serde::{Deserialize, Serialize};

/// The metadata document pinned alongside an asset's image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftMetadata {
    /// Asset name.
    pub name: String,
    /// Edition number (always 1).
    pub edition: u32,
    /// Asset description.
    pub description: String,
    /// Royalty basis points (always 0).
    pub seller_fee_basis_points: u32,
    /// Gateway URI of the pinned image.
    pub image: String,
    /// External link placeholder.
    pub external_url: String,
    /// Ordered trait list; core asset fields first, custom fields after.
    pub attributes: Vec<MetadataAttribute>,
    /// Collection the token belongs to.
    pub collection: MetadataCollection,
    /// Assembly time as unix seconds.
    pub date: i64,
    /// File, category, and creator-share properties.
    pub properties: MetadataProperties,
    /// Token symbol.
    pub symbol: String,
}

/// A single trait entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataAttribute {
    /// Trait name.
    pub trait_type: String,
    /// Trait value; numeric asset fields stay JSON numbers.
    pub value: serde_json::Value,
}

impl MetadataAttribute {
    /// Attribute with a string value.
    pub fn text(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: serde_json::Value::String(value.into()),
        }
    }

    /// Attribute with a numeric value.
    pub fn number(trait_type: impl Into<String>, value: i32) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: serde_json::Value::from(value),
        }
    }
}

/// Collection identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataCollection {
    /// Collection name.
    pub name: String,
    /// Collection family.
    pub family: String,
}

/// Additional token properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataProperties {
    /// Files attached to the token.
    pub files: Vec<MetadataFile>,
    /// Token category.
    pub category: String,
    /// Creator royalty shares.
    pub creators: Vec<MetadataCreator>,
}

/// A file reference within the metadata properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFile {
    /// Gateway URI of the file.
    pub uri: String,
    /// File kind label.
    #[serde(rename = "type")]
    pub file_type: String,
}

/// A creator entry with its royalty share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataCreator {
    /// Wallet address of the creator.
    pub address: String,
    /// Share percentage.
    pub share: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape_and_key_order() {
        let metadata = NftMetadata {
            name: "X".to_string(),
            edition: 1,
            description: "D".to_string(),
            seller_fee_basis_points: 0,
            image: "ipfs://img".to_string(),
            external_url: "External URL".to_string(),
            attributes: vec![MetadataAttribute {
                trait_type: "Name".to_string(),
                value: json!("X"),
            }],
            collection: MetadataCollection {
                name: "Tokenized NFT".to_string(),
                family: "Tokenized NFT".to_string(),
            },
            date: 1_700_000_000,
            properties: MetadataProperties {
                files: vec![MetadataFile {
                    uri: "ipfs://img".to_string(),
                    file_type: "Image".to_string(),
                }],
                category: "Asset".to_string(),
                creators: vec![MetadataCreator {
                    address: "0xABC".to_string(),
                    share: 100,
                }],
            },
            symbol: "Tokenized NFT".to_string(),
        };

        let expected = concat!(
            r#"{"name":"X","edition":1,"description":"D","seller_fee_basis_points":0,"#,
            r#""image":"ipfs://img","external_url":"External URL","#,
            r#""attributes":[{"trait_type":"Name","value":"X"}],"#,
            r#""collection":{"name":"Tokenized NFT","family":"Tokenized NFT"},"#,
            r#""date":1700000000,"#,
            r#""properties":{"files":[{"uri":"ipfs://img","type":"Image"}],"#,
            r#""category":"Asset","creators":[{"address":"0xABC","share":100}]},"#,
            r#""symbol":"Tokenized NFT"}"#,
        );
        assert_eq!(serde_json::to_string(&metadata).unwrap(), expected);
    }

    #[test]
    fn test_numeric_attribute_values_stay_numbers() {
        let attribute = MetadataAttribute {
            trait_type: "Equity".to_string(),
            value: json!(5),
        };
        assert_eq!(
            serde_json::to_string(&attribute).unwrap(),
            r#"{"trait_type":"Equity","value":5}"#
        );
    }
}
