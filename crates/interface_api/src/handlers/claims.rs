//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};
use domain_claims::{Claim, ClaimPatch};
use infra_db::ClaimsRepository;

/// Lists claims, optionally filtered by the (orderNumber, email) pair
///
/// Filtering only engages when both parameters are present, matching the
/// portal's claim-lookup form; otherwise the full listing is returned.
pub async fn list_claims(
    State(state): State<AppState>,
    Query(params): Query<ListClaimsParams>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let repo = ClaimsRepository::new(state.pool.clone());

    let rows = match (params.order_number, params.email) {
        (Some(order_number), Some(email)) => {
            repo.find_by_order_and_email(&order_number, &email).await?
        }
        _ => repo.list_all().await?,
    };

    let claims = rows
        .into_iter()
        .map(|row| ClaimResponse::from(Claim::from(row)))
        .collect();

    Ok(Json(claims))
}

/// Files a new claim
///
/// Whatever status the client supplies is discarded; created claims are
/// always Pending.
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let mut claim = Claim::file(request.order_number, request.email);
    if let Some(full_name) = request.full_name {
        claim = claim.with_full_name(full_name);
    }
    if let Some(phone) = request.phone {
        claim = claim.with_phone(phone);
    }
    if let Some(description) = request.description {
        claim = claim.with_description(description);
    }

    let repo = ClaimsRepository::new(state.pool.clone());
    let row = repo.create(&claim).await?;

    Ok(Json(ClaimResponse::from(Claim::from(row))))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let repo = ClaimsRepository::new(state.pool.clone());
    let row = repo.get_by_id(id).await?;

    Ok(Json(ClaimResponse::from(Claim::from(row))))
}

/// Applies a partial update to a claim
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let patch = ClaimPatch::from(request);

    let repo = ClaimsRepository::new(state.pool.clone());
    let row = repo.update(id, &patch).await?;

    Ok(Json(ClaimResponse::from(Claim::from(row))))
}
