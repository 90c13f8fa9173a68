//! Request extractors.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use smartstay_account::{AccountError, User};
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// Extractor requiring a valid bearer token.
///
/// Reads `Authorization: Bearer <token>`, verifies the signature and
/// expiry, and loads the user the claims name.
#[derive(Debug)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = Arc::<AppState>::from_ref(state);

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::unauthorized("Missing token"))?;

        let claims = state.signer.verify(token)?;
        let user_id = claims.user_id()?;
        let user = state
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound { id: user_id })?;

        Ok(CurrentUser(user))
    }
}
