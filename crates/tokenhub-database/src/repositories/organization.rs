//! Organization repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use tokenhub_core::error::{AppError, ErrorKind};
use tokenhub_core::result::AppResult;
use tokenhub_entity::organization::{CreateOrganization, Organization};

/// Repository for organization persistence and query operations.
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    /// Create a new organization repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new organization and return it with its assigned identity.
    pub async fn create(&self, data: &CreateOrganization) -> AppResult<Organization> {
        sqlx::query_as::<_, Organization>(
            "INSERT INTO organizations (name, logo, admin) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.logo)
        .bind(&data.admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create organization", e)
        })
    }

    /// Find an organization by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Organization>> {
        sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find organization by id", e)
            })
    }

    /// List every organization, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Organization>> {
        sqlx::query_as::<_, Organization>("SELECT * FROM organizations ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list organizations", e)
            })
    }

    /// List organizations administered by the given email.
    pub async fn find_by_admin(&self, admin: &str) -> AppResult<Vec<Organization>> {
        sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations WHERE admin = $1 ORDER BY created_at DESC",
        )
        .bind(admin)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list organizations by admin", e)
        })
    }
}
