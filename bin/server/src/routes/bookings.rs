//! Booking endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Deserializer};
use smartstay_booking::Booking;
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// Payload for `POST /api/bookings`.
///
/// Every field is optional and numeric fields accept numbers or
/// numeric strings, matching how loosely the web client fills the
/// booking form. Absent fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub guests: Option<u32>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total: Option<u64>,
    #[serde(default)]
    pub user_id: Option<String>,
}

fn coerce_integer(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(coerce_integer)
        .and_then(|n| u32::try_from(n).ok()))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_integer))
}

/// `POST /api/bookings`
///
/// No validation beyond shape coercion; whatever the client posts is
/// stored and echoed back with a generated id and timestamp.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<Booking>, ApiError> {
    let booking = Booking::new(
        request.name.unwrap_or_default(),
        request.email.unwrap_or_default(),
        request.hotel_id.unwrap_or_default(),
        request.room_type.unwrap_or_default(),
        request.check_in.unwrap_or_default(),
        request.check_out.unwrap_or_default(),
        request.guests.unwrap_or_default(),
        request.total.unwrap_or_default(),
        request.user_id,
    );
    state.bookings.create(booking.clone()).await?;
    tracing::info!(booking_id = %booking.id, hotel_id = %booking.hotel_id, "booking stored");

    Ok(Json(booking))
}

/// `GET /api/bookings/user/{id}`
///
/// The id is matched as the client sent it; there is no auth guard on
/// this listing.
pub async fn list_user_bookings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = state.bookings.list_for_user(&id).await?;
    Ok(Json(bookings))
}
