//! Account endpoints: register, login, and the current-user lookup.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use smartstay_account::{
    AccountError, User, UserProfile, hash_password, normalize_email, verify_password,
};
use std::sync::Arc;

use crate::{error::ApiError, extract::CurrentUser, routes::required_text, state::AppState};

/// Payload for `POST /api/auth/register`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Payload for `POST /api/auth/login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Token plus profile, returned by both register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Profile envelope for `GET /api/auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let full_name = required_text(request.full_name.as_deref(), "Full name is required")?;
    let email = required_text(request.email.as_deref(), "Email is required")?;
    let password = required_text(request.password.as_deref(), "Password is required")?;

    let user = User::new(full_name, normalize_email(&email), hash_password(&password));
    state.users.create(user.clone()).await?;
    tracing::info!(user_id = %user.id(), "user registered");

    let token = state.signer.issue(user.id(), state.token_ttl);
    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = required_text(request.email.as_deref(), "Email is required")?;
    let password = required_text(request.password.as_deref(), "Password is required")?;

    // Same rejection for an unknown email as for a wrong password.
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(AccountError::InvalidCredentials)?;
    if !verify_password(&password, user.password_hash())? {
        return Err(AccountError::InvalidCredentials.into());
    }

    let token = state.signer.issue(user.id(), state.token_ttl);
    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}

/// `GET /api/auth/me`
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: user.profile(),
    })
}
