//! The booking record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartstay_core::BookingId;

/// A stored reservation request.
///
/// Goes out on the wire as-is, in camelCase. `user_id` is whatever the
/// client associated the booking with; unauthenticated bookings have
/// none and the field is omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub email: String,
    pub hotel_id: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a record with a generated ID and the current timestamp.
    #[must_use]
    #[expect(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        hotel_id: String,
        room_type: String,
        check_in: String,
        check_out: String,
        guests: u32,
        total: u64,
        user_id: Option<String>,
    ) -> Self {
        Self {
            id: BookingId::new(),
            name,
            email,
            hotel_id,
            room_type,
            check_in,
            check_out,
            guests,
            total,
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_booking(user_id: Option<&str>) -> Booking {
        Booking::new(
            "Alex Johnson".to_string(),
            "alex@example.com".to_string(),
            "h1".to_string(),
            "Deluxe Suite".to_string(),
            "2026-03-10".to_string(),
            "2026-03-12".to_string(),
            2,
            280,
            user_id.map(str::to_string),
        )
    }

    #[test]
    fn new_booking_has_generated_id() {
        let booking = demo_booking(None);
        assert!(booking.id.to_string().starts_with("bkg_"));
    }

    #[test]
    fn serializes_in_camel_case() {
        let booking = demo_booking(Some("usr_01ARZ3NDEKTSV4RRFFQ69G5FAV"));
        let json = serde_json::to_value(&booking).expect("serialize");

        assert_eq!(json["hotelId"], "h1");
        assert_eq!(json["roomType"], "Deluxe Suite");
        assert_eq!(json["checkIn"], "2026-03-10");
        assert_eq!(json["checkOut"], "2026-03-12");
        assert_eq!(json["guests"], 2);
        assert_eq!(json["total"], 280);
        assert_eq!(json["userId"], "usr_01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn missing_user_id_is_omitted() {
        let json = serde_json::to_value(demo_booking(None)).expect("serialize");
        assert!(json.get("userId").is_none());
    }
}
