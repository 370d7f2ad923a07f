//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_claims::{Claim, ClaimPatch, ClaimStatus};

/// Query parameters for the claims listing
///
/// Filtering only engages when both values are present; a lone order
/// number or email returns the full listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClaimsParams {
    pub order_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub order_number: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    /// Accepted but ignored; new claims always start out Pending
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimRequest {
    pub order_number: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub status: Option<ClaimStatus>,
}

impl From<UpdateClaimRequest> for ClaimPatch {
    fn from(request: UpdateClaimRequest) -> Self {
        ClaimPatch {
            order_number: request.order_number,
            email: request.email,
            full_name: request.full_name,
            phone: request.phone,
            description: request.description,
            status: request.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: Uuid,
    pub claim_number: String,
    pub order_number: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: (*claim.id.as_uuid()),
            claim_number: claim.claim_number,
            order_number: claim.order_number,
            email: claim.email,
            full_name: claim.full_name,
            phone: claim.phone,
            description: claim.description,
            status: claim.status,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}
