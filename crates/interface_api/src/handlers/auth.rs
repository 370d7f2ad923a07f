//! Login handler

use axum::{extract::State, Json};
use tracing::warn;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::{error::ApiError, AppState};
use domain_accounts::User;
use infra_db::UserRepository;

/// Authenticates a user by comparing the submitted password against the
/// stored hash
///
/// Unknown email and wrong password produce the same 401; nothing in the
/// response distinguishes the two.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());

    let Some(row) = repo.find_by_email(&request.email).await? else {
        warn!(email = %request.email, "Login attempt for unknown email");
        return Err(ApiError::Unauthorized);
    };

    let user = User::from(row);
    if !user.verify_password(&request.password)? {
        warn!(email = %request.email, "Login attempt with wrong password");
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(LoginResponse {
        email: user.email,
        is_admin: user.is_admin,
    }))
}
