//! HTTP route handlers.

pub mod agent;
pub mod assist;
pub mod auth;
pub mod bookings;
pub mod hotels;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// Builds the API route table.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        // Catalog
        .route("/api/hotels", get(hotels::list_hotels))
        .route("/api/hotels/{id}", get(hotels::get_hotel))
        // Accounts
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Bookings
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/user/{id}", get(bookings::list_user_bookings))
        // Reservation agent
        .route("/api/agent/search", post(agent::search_hotels))
        .route("/api/agent/booking/start", post(agent::start_booking))
        .route("/api/agent/booking/message", post(agent::booking_message))
        .route("/api/agent/booking/cancel", post(agent::cancel_booking))
        // AI assist
        .route("/api/ai/chat", post(assist::chat))
        .route("/api/ai/recommend", post(assist::recommend))
}

/// Pulls a required text field out of a request, rejecting missing or
/// blank values. The value itself is returned as sent.
pub(crate) fn required_text(value: Option<&str>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(ApiError::bad_request(message)),
    }
}
