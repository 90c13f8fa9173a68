//! Reservation-agent endpoints: catalog search and the guided booking
//! dialogue.
//!
//! The dialogue itself lives in `smartstay-concierge`; these handlers
//! only resolve the hotel, shuttle sessions in and out of the store,
//! and shape the wire envelopes.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use smartstay_catalog::{SearchCriteria, SearchResults, search};
use smartstay_concierge::{AdvanceOutcome, BookingSession, CANCELLED_REPLY, advance, step_prompt};
use smartstay_core::BookingSessionId;
use std::sync::Arc;

use crate::{error::ApiError, routes::required_text, state::AppState};

/// Payload for `POST /api/agent/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Payload for `POST /api/agent/booking/start`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBookingRequest {
    #[serde(default)]
    pub hotel_id: Option<String>,
}

/// Payload for `POST /api/agent/booking/message`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingMessageRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for `POST /api/agent/booking/cancel`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Fresh session plus its opening prompt.
#[derive(Debug, Serialize)]
pub struct StartBookingResponse {
    pub session: BookingSession,
    pub reply: String,
}

/// One dialogue turn. After an in-dialogue cancellation `session` is
/// `null` and `currentStep` is the literal `cancelled`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingMessageResponse {
    pub session: Option<BookingSession>,
    pub current_step: String,
    pub reply: String,
}

/// Acknowledgement for an explicit cancel call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingResponse {
    pub message: String,
    pub current_step: String,
}

/// `POST /api/agent/search`
pub async fn search_hotels(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResults>, ApiError> {
    let query = required_text(request.query.as_deref(), "Query is required")?;
    let hotels = state.hotels.list().await?;
    let criteria = SearchCriteria::parse(&query);
    Ok(Json(search(&hotels, &criteria)))
}

/// `POST /api/agent/booking/start`
pub async fn start_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartBookingRequest>,
) -> Result<Json<StartBookingResponse>, ApiError> {
    let hotel_id = required_text(request.hotel_id.as_deref(), "hotelId is required")?;
    let hotel = state
        .hotels
        .get(&hotel_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Hotel not found"))?;

    let session = BookingSession::new(&hotel.id, &hotel.name);
    let reply = step_prompt(&session, &hotel.room_types);
    state.sessions.put(session.clone()).await;
    tracing::debug!(
        session_id = %session.session_id(),
        hotel_id = %hotel.id,
        "booking session opened"
    );

    Ok(Json(StartBookingResponse { session, reply }))
}

/// `POST /api/agent/booking/message`
pub async fn booking_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingMessageRequest>,
) -> Result<Json<BookingMessageResponse>, ApiError> {
    let session_id = required_text(request.session_id.as_deref(), "sessionId is required")?;
    let message = required_text(request.message.as_deref(), "Message is required")?;

    let session_id: BookingSessionId = session_id
        .parse()
        .map_err(|_| ApiError::not_found("Session not found"))?;
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| ApiError::not_found("Session not found"))?;

    // Room-type matching runs against the hotel's current catalog
    // entry. If the entry vanished mid-dialogue, match against nothing.
    let room_types = state
        .hotels
        .get(session.hotel_id())
        .await?
        .map(|hotel| hotel.room_types)
        .unwrap_or_default();

    match advance(session, &room_types, &message) {
        AdvanceOutcome::Continue { session, reply } => {
            state.sessions.put(session.clone()).await;
            Ok(Json(BookingMessageResponse {
                current_step: session.current_step().to_string(),
                session: Some(session),
                reply,
            }))
        }
        AdvanceOutcome::Completed {
            session,
            reference,
            reply,
        } => {
            state.sessions.put(session.clone()).await;
            tracing::info!(
                session_id = %session.session_id(),
                %reference,
                "booking confirmed"
            );
            Ok(Json(BookingMessageResponse {
                current_step: session.current_step().to_string(),
                session: Some(session),
                reply,
            }))
        }
        AdvanceOutcome::Cancelled { reply } => {
            state.sessions.remove(session_id).await;
            Ok(Json(BookingMessageResponse {
                session: None,
                current_step: "cancelled".to_string(),
                reply,
            }))
        }
    }
}

/// `POST /api/agent/booking/cancel`
///
/// Idempotent: cancelling an unknown or already-removed session still
/// acknowledges.
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CancelBookingRequest>,
) -> Result<Json<CancelBookingResponse>, ApiError> {
    let session_id = required_text(request.session_id.as_deref(), "sessionId is required")?;

    if let Ok(session_id) = session_id.parse::<BookingSessionId>() {
        if state.sessions.remove(session_id).await {
            tracing::debug!(%session_id, "booking session cancelled");
        }
    }

    Ok(Json(CancelBookingResponse {
        message: CANCELLED_REPLY.to_string(),
        current_step: "cancelled".to_string(),
    }))
}
