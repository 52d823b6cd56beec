//! Asset domain entities.

pub mod metadata;
pub mod model;

pub use metadata::{
    MetadataAttribute, MetadataCollection, MetadataCreator, MetadataFile, MetadataProperties,
    NftMetadata,
};
pub use model::{Asset, CreateAsset};
