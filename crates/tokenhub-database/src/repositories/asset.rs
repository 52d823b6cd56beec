//! Asset repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use tokenhub_core::error::{AppError, ErrorKind};
use tokenhub_core::result::AppResult;
use tokenhub_entity::asset::{Asset, CreateAsset};

/// Repository for asset persistence and query operations.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new asset and return it with its assigned identity.
    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "INSERT INTO assets (name, description, equity, seeking, location, category, \
                                 valuation, share_price, creator, owner, img_url, map_url, \
                                 field_names, field_values) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.equity)
        .bind(data.seeking)
        .bind(&data.location)
        .bind(&data.category)
        .bind(data.valuation)
        .bind(data.share_price)
        .bind(&data.creator)
        .bind(&data.owner)
        .bind(&data.img_url)
        .bind(&data.map_url)
        .bind(&data.field_names)
        .bind(&data.values)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create asset", e))
    }

    /// Find an asset by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Asset>> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find asset by id", e)
            })
    }

    /// List all assets submitted by a user.
    pub async fn find_by_creator(&self, creator: &str) -> AppResult<Vec<Asset>> {
        sqlx::query_as::<_, Asset>(
            "SELECT * FROM assets WHERE creator = $1 ORDER BY created_at DESC",
        )
        .bind(creator)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assets by creator", e)
        })
    }

    /// List all assets owned by an organization.
    pub async fn find_by_owner(&self, owner: &str) -> AppResult<Vec<Asset>> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE owner = $1 ORDER BY created_at DESC")
            .bind(owner)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list assets by owner", e)
            })
    }

    /// Record the on-chain token id for an asset.
    ///
    /// Last write wins; there is no optimistic-concurrency check.
    pub async fn set_token_id(&self, id: Uuid, token_id: i64) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "UPDATE assets SET token_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(token_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set token id", e))?
        .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }
}
