//! Organization membership repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use tokenhub_core::error::{AppError, ErrorKind};
use tokenhub_core::result::AppResult;
use tokenhub_entity::organization::{CreateMember, Member};

/// Repository for membership persistence and query operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new membership and return it with its assigned identity.
    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (email, role, org_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.email)
        .bind(data.role)
        .bind(data.org_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create member", e))
    }

    /// List every membership held by the given email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE email = $1 ORDER BY created_at ASC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list members by email", e)
        })
    }

    /// List every member of the given organization.
    pub async fn find_by_org(&self, org_id: Uuid) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE org_id = $1 ORDER BY created_at ASC",
        )
        .bind(org_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list members by org", e)
        })
    }

    /// Find the membership matching an organization/email pair.
    ///
    /// Duplicates are possible since the table carries no unique
    /// constraint; the oldest match is returned.
    pub async fn find_by_org_and_email(
        &self,
        org_id: Uuid,
        email: &str,
    ) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE org_id = $1 AND email = $2 \
             ORDER BY created_at ASC LIMIT 1",
        )
        .bind(org_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find member", e))
    }

    /// Delete a membership by primary key.
    ///
    /// Returns whether a row was removed; deleting an already-removed
    /// membership is not an error.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete member", e))?;

        Ok(result.rows_affected() > 0)
    }
}
