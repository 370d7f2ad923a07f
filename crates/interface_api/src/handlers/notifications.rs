//! Status-update notification handler

use axum::{extract::State, Json};

use crate::dto::notifications::{SendStatusUpdateRequest, SendStatusUpdateResponse};
use crate::{error::ApiError, AppState};
use domain_claims::StatusUpdate;

/// Sends a status-update notification to a claimant
///
/// Delivery goes through the notifier port; the default adapter only logs
/// the message and reports success.
pub async fn send_status_update(
    State(state): State<AppState>,
    Json(request): Json<SendStatusUpdateRequest>,
) -> Result<Json<SendStatusUpdateResponse>, ApiError> {
    let update = StatusUpdate {
        recipient: request.to,
        claim_number: request.claim_number,
        new_status: request.new_status,
    };

    state
        .notifier
        .notify_status_change(update)
        .await
        .map_err(|_| ApiError::Internal("Error sending email".to_string()))?;

    Ok(Json(SendStatusUpdateResponse {
        message: "Email sent successfully".to_string(),
    }))
}
