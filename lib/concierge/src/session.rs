//! Booking session state and step resolution.
//!
//! Sessions serialize straight onto the wire in camelCase, so the
//! field set here is exactly what the web client sees.

use serde::{Deserialize, Serialize};
use smartstay_core::BookingSessionId;
use std::fmt;

/// A stage of the slot-filling booking dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    /// Waiting for a room-type choice.
    RoomType,
    /// Waiting for a check-in/check-out date range.
    Dates,
    /// Waiting for a guest count.
    Guests,
    /// Waiting for the guest's name.
    GuestInfo,
    /// All slots filled; waiting for an explicit confirmation.
    Confirmation,
    /// Confirmed and done.
    Completed,
}

impl BookingStep {
    /// Returns the wire name of the step.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoomType => "room_type",
            Self::Dates => "dates",
            Self::Guests => "guests",
            Self::GuestInfo => "guest_info",
            Self::Confirmation => "confirmation",
            Self::Completed => "completed",
        }
    }

    /// Returns true once the booking is confirmed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A multi-turn booking conversation for one hotel.
///
/// Slot fields start empty and are only ever filled, never cleared;
/// cancellation deletes the whole session instead. `current_step` is
/// recomputed from slot state after every mutation, so it can never go
/// stale. Fields are private to keep both of those properties true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSession {
    session_id: BookingSessionId,
    hotel_id: String,
    hotel_name: String,
    room_type: String,
    check_in: String,
    check_out: String,
    guests: u32,
    guest_name: String,
    confirmed: bool,
    current_step: BookingStep,
}

impl BookingSession {
    /// Opens a fresh session for the given catalog entry.
    #[must_use]
    pub fn new(hotel_id: impl Into<String>, hotel_name: impl Into<String>) -> Self {
        Self {
            session_id: BookingSessionId::new(),
            hotel_id: hotel_id.into(),
            hotel_name: hotel_name.into(),
            room_type: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: 0,
            guest_name: String::new(),
            confirmed: false,
            current_step: BookingStep::RoomType,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn session_id(&self) -> BookingSessionId {
        self.session_id
    }

    /// Returns the catalog ID of the hotel being booked.
    #[must_use]
    pub fn hotel_id(&self) -> &str {
        &self.hotel_id
    }

    /// Returns the display name of the hotel being booked.
    #[must_use]
    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    /// Returns the chosen room type, or an empty string if not chosen yet.
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Returns the check-in date, or an empty string if not given yet.
    #[must_use]
    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    /// Returns the check-out date, or an empty string if not given yet.
    #[must_use]
    pub fn check_out(&self) -> &str {
        &self.check_out
    }

    /// Returns the guest count; zero means not given yet.
    #[must_use]
    pub fn guests(&self) -> u32 {
        self.guests
    }

    /// Returns the guest name, or an empty string if not given yet.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns true if the guest has confirmed the booking.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Returns the current dialogue step.
    #[must_use]
    pub fn current_step(&self) -> BookingStep {
        self.current_step
    }

    /// Sets the room type. A slot that is already filled stays as it is.
    pub fn fill_room_type(&mut self, room_type: impl Into<String>) {
        if self.room_type.is_empty() {
            self.room_type = room_type.into();
            self.refresh_step();
        }
    }

    /// Sets the stay dates. Dates that are already filled stay as they are.
    pub fn fill_dates(&mut self, check_in: impl Into<String>, check_out: impl Into<String>) {
        if self.check_in.is_empty() || self.check_out.is_empty() {
            self.check_in = check_in.into();
            self.check_out = check_out.into();
            self.refresh_step();
        }
    }

    /// Sets the guest count. A non-zero count stays as it is.
    pub fn fill_guests(&mut self, guests: u32) {
        if self.guests == 0 {
            self.guests = guests;
            self.refresh_step();
        }
    }

    /// Sets the guest name. A slot that is already filled stays as it is.
    pub fn fill_guest_name(&mut self, guest_name: impl Into<String>) {
        if self.guest_name.is_empty() {
            self.guest_name = guest_name.into();
            self.refresh_step();
        }
    }

    /// Marks the booking confirmed.
    ///
    /// Only takes effect in the confirmation step, i.e. once every
    /// other slot is filled.
    pub fn confirm(&mut self) {
        if self.current_step == BookingStep::Confirmation {
            self.confirmed = true;
            self.refresh_step();
        }
    }

    fn refresh_step(&mut self) {
        self.current_step = resolve_step(self);
    }
}

/// Computes the current step from slot state.
///
/// Strict priority chain: room type, then dates, then guests, then
/// guest name, then confirmation, then completed. Each check applies
/// only when every earlier slot is filled; a zero guest count means
/// the slot is unset.
#[must_use]
pub fn resolve_step(session: &BookingSession) -> BookingStep {
    if session.room_type.is_empty() {
        BookingStep::RoomType
    } else if session.check_in.is_empty() || session.check_out.is_empty() {
        BookingStep::Dates
    } else if session.guests == 0 {
        BookingStep::Guests
    } else if session.guest_name.is_empty() {
        BookingStep::GuestInfo
    } else if !session.confirmed {
        BookingStep::Confirmation
    } else {
        BookingStep::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_session() -> BookingSession {
        BookingSession::new("h1", "Aurora Bay Resort")
    }

    #[test]
    fn new_session_starts_at_room_type() {
        let session = demo_session();
        assert_eq!(session.current_step(), BookingStep::RoomType);
        assert!(!session.is_confirmed());
        assert_eq!(session.guests(), 0);
    }

    #[test]
    fn step_follows_priority_chain() {
        let mut session = demo_session();

        session.fill_room_type("Deluxe Suite");
        assert_eq!(session.current_step(), BookingStep::Dates);

        session.fill_dates("2026-03-10", "2026-03-12");
        assert_eq!(session.current_step(), BookingStep::Guests);

        session.fill_guests(2);
        assert_eq!(session.current_step(), BookingStep::GuestInfo);

        session.fill_guest_name("Alex");
        assert_eq!(session.current_step(), BookingStep::Confirmation);

        session.confirm();
        assert_eq!(session.current_step(), BookingStep::Completed);
        assert!(session.is_confirmed());
    }

    #[test]
    fn earlier_slots_take_priority_over_later_fills() {
        // Guests filled first, room type still missing: the step stays
        // at room_type until the higher-priority slot is filled.
        let mut session = demo_session();
        session.fill_guests(3);
        assert_eq!(session.current_step(), BookingStep::RoomType);

        session.fill_room_type("Ocean Villa");
        assert_eq!(session.current_step(), BookingStep::Dates);
    }

    #[test]
    fn filled_slots_are_never_overwritten() {
        let mut session = demo_session();
        session.fill_room_type("Deluxe Suite");
        session.fill_room_type("Ocean Villa");
        assert_eq!(session.room_type(), "Deluxe Suite");

        session.fill_guests(2);
        session.fill_guests(5);
        assert_eq!(session.guests(), 2);

        session.fill_guest_name("Alex");
        session.fill_guest_name("Priya");
        assert_eq!(session.guest_name(), "Alex");
    }

    #[test]
    fn zero_guest_count_stays_unset() {
        let mut session = demo_session();
        session.fill_room_type("Deluxe Suite");
        session.fill_dates("2026-03-10", "2026-03-12");
        session.fill_guests(0);
        assert_eq!(session.current_step(), BookingStep::Guests);
    }

    #[test]
    fn confirm_outside_confirmation_step_does_nothing() {
        let mut session = demo_session();
        session.confirm();
        assert!(!session.is_confirmed());
        assert_eq!(session.current_step(), BookingStep::RoomType);
    }

    #[test]
    fn current_step_always_matches_resolver() {
        let mut session = demo_session();
        assert_eq!(session.current_step(), resolve_step(&session));

        session.fill_guests(2);
        assert_eq!(session.current_step(), resolve_step(&session));

        session.fill_room_type("Family Studio");
        assert_eq!(session.current_step(), resolve_step(&session));

        session.fill_dates("2026-05-01", "2026-05-03");
        assert_eq!(session.current_step(), resolve_step(&session));

        session.fill_guest_name("Sam");
        assert_eq!(session.current_step(), resolve_step(&session));

        session.confirm();
        assert_eq!(session.current_step(), resolve_step(&session));
    }

    #[test]
    fn session_serializes_in_camel_case() {
        let mut session = demo_session();
        session.fill_room_type("Deluxe Suite");

        let json = serde_json::to_value(&session).expect("serialize");
        assert!(json["sessionId"].is_string());
        assert_eq!(json["hotelId"], "h1");
        assert_eq!(json["hotelName"], "Aurora Bay Resort");
        assert_eq!(json["roomType"], "Deluxe Suite");
        assert_eq!(json["checkIn"], "");
        assert_eq!(json["checkOut"], "");
        assert_eq!(json["guests"], 0);
        assert_eq!(json["guestName"], "");
        assert_eq!(json["confirmed"], false);
        assert_eq!(json["currentStep"], "dates");
    }

    #[test]
    fn step_wire_names() {
        assert_eq!(BookingStep::RoomType.as_str(), "room_type");
        assert_eq!(BookingStep::GuestInfo.as_str(), "guest_info");
        assert_eq!(
            serde_json::to_value(BookingStep::Confirmation).expect("serialize"),
            "confirmation"
        );
    }
}
