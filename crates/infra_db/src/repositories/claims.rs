//! Claims repository implementation
//!
//! Database access for claim records: listing, lookup by the
//! (order number, email) pair, creation, and partial updates.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;
use domain_claims::{Claim, ClaimPatch, ClaimStatus};

const CLAIM_COLUMNS: &str = "claim_id, claim_number, order_number, email, \
     full_name, phone, description, status, created_at, updated_at";

/// Repository for managing claim records
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves every claim, newest first
    pub async fn list_all(&self) -> Result<Vec<ClaimRow>, DatabaseError> {
        let claims = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(claims)
    }

    /// Retrieves the claims filed for an order by a claimant
    ///
    /// Both values must match; this backs the portal's claim-lookup form
    /// where customers enter their order number and email together.
    pub async fn find_by_order_and_email(
        &self,
        order_number: &str,
        email: &str,
    ) -> Result<Vec<ClaimRow>, DatabaseError> {
        let claims = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims \
             WHERE order_number = $1 AND email = $2 \
             ORDER BY created_at DESC"
        ))
        .bind(order_number)
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(claims)
    }

    /// Retrieves a claim by its identifier
    ///
    /// # Returns
    ///
    /// The claim record or NotFound error
    pub async fn get_by_id(&self, claim_id: Uuid) -> Result<ClaimRow, DatabaseError> {
        let claim = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1"
        ))
        .bind(claim_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        Ok(claim)
    }

    /// Persists a newly filed claim
    pub async fn create(&self, claim: &Claim) -> Result<ClaimRow, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "INSERT INTO claims ( \
                 claim_id, claim_number, order_number, email, \
                 full_name, phone, description, status, created_at, updated_at \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             RETURNING {CLAIM_COLUMNS}"
        ))
        .bind(*claim.id.as_uuid())
        .bind(&claim.claim_number)
        .bind(&claim.order_number)
        .bind(&claim.email)
        .bind(&claim.full_name)
        .bind(&claim.phone)
        .bind(&claim.description)
        .bind(claim.status.as_str())
        .bind(claim.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Applies a partial update to a claim
    ///
    /// Absent patch fields keep their stored values; `updated_at` always
    /// moves forward, even for an empty patch.
    ///
    /// # Returns
    ///
    /// The updated claim record or NotFound error
    pub async fn update(
        &self,
        claim_id: Uuid,
        patch: &ClaimPatch,
    ) -> Result<ClaimRow, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "UPDATE claims SET \
                 order_number = COALESCE($2, order_number), \
                 email = COALESCE($3, email), \
                 full_name = COALESCE($4, full_name), \
                 phone = COALESCE($5, phone), \
                 description = COALESCE($6, description), \
                 status = COALESCE($7, status), \
                 updated_at = $8 \
             WHERE claim_id = $1 \
             RETURNING {CLAIM_COLUMNS}"
        ))
        .bind(claim_id)
        .bind(&patch.order_number)
        .bind(&patch.email)
        .bind(&patch.full_name)
        .bind(&patch.phone)
        .bind(&patch.description)
        .bind(patch.status.as_ref().map(|s| s.as_str().to_string()))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        Ok(row)
    }
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub claim_id: Uuid,
    pub claim_number: String,
    pub order_number: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: row.claim_id.into(),
            claim_number: row.claim_number,
            order_number: row.order_number,
            email: row.email,
            full_name: row.full_name,
            phone: row.phone,
            description: row.description,
            // Unknown status strings are preserved, not rejected
            status: ClaimStatus::from(row.status),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
