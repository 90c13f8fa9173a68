//! Dialogue controller for the booking flow.
//!
//! One call to [`advance`] handles one guest message: cancellation and
//! confirmation keywords first, then slot extraction, then a prompt
//! for whatever the session still needs.

use crate::extract::{
    extract_date_range, extract_guest_count, extract_guest_name, extract_room_type,
};
use crate::session::{BookingSession, BookingStep};
use smartstay_core::BookingReference;

/// Messages that abort the dialogue outright, at any step.
const CANCEL_KEYWORDS: [&str; 3] = ["cancel", "stop", "abort"];

/// Messages accepted as confirmation while in the confirmation step.
const AFFIRM_KEYWORDS: [&str; 3] = ["confirm", "yes", "confirm booking"];

/// Reply sent when a session is cancelled mid-dialogue.
pub const CANCELLED_REPLY: &str = "Booking cancelled. You can start a new one anytime.";

/// Outcome of advancing a booking dialogue by one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Dialogue continues; the updated session should be saved.
    Continue {
        session: BookingSession,
        reply: String,
    },
    /// Booking confirmed; a reference was issued.
    Completed {
        session: BookingSession,
        reference: BookingReference,
        reply: String,
    },
    /// Guest cancelled; the session should be removed.
    Cancelled { reply: String },
}

/// Advances the dialogue by one guest message.
///
/// `room_types` is the hotel's ordered room-type list, looked up by
/// the caller from the catalog entry the session was opened against.
///
/// Filled slots are never cleared here; only cancellation (which drops
/// the session entirely) or a fresh start resets state.
#[must_use]
pub fn advance(mut session: BookingSession, room_types: &[String], message: &str) -> AdvanceOutcome {
    let normalized = message.trim().to_lowercase();

    if CANCEL_KEYWORDS.contains(&normalized.as_str()) {
        return AdvanceOutcome::Cancelled {
            reply: CANCELLED_REPLY.to_string(),
        };
    }

    if session.current_step() == BookingStep::Confirmation
        && AFFIRM_KEYWORDS.contains(&normalized.as_str())
    {
        session.confirm();
        let reference = BookingReference::new();
        let reply = format!(
            "Booking confirmed for {} at {}. Your reference is {reference}.",
            session.guest_name(),
            session.hotel_name(),
        );
        return AdvanceOutcome::Completed {
            session,
            reference,
            reply,
        };
    }

    // Independent checks against the same message; one message can
    // fill several slots. The session ignores fills for slots that are
    // already set.
    if let Some(room_type) = extract_room_type(message, room_types) {
        session.fill_room_type(room_type);
    }
    if let Some((check_in, check_out)) = extract_date_range(message) {
        session.fill_dates(check_in, check_out);
    }
    if let Some(guests) = extract_guest_count(message) {
        session.fill_guests(guests);
    }
    if let Some(guest_name) = extract_guest_name(message) {
        session.fill_guest_name(guest_name);
    }

    let reply = step_prompt(&session, room_types);
    AdvanceOutcome::Continue { session, reply }
}

/// Prompt for whatever the session still needs.
///
/// Also used for the opening message of a fresh session.
#[must_use]
pub fn step_prompt(session: &BookingSession, room_types: &[String]) -> String {
    match session.current_step() {
        BookingStep::RoomType => format!(
            "Which room type would you like at {}? Options: {}.",
            session.hotel_name(),
            room_types.join(", "),
        ),
        BookingStep::Dates => {
            "What dates will you stay? Send them like 2026-03-10 to 2026-03-12.".to_string()
        }
        BookingStep::Guests => "How many guests should I book for? For example: 2 guests.".to_string(),
        BookingStep::GuestInfo => {
            "What name should the booking be under? You can reply like Name: Alex.".to_string()
        }
        BookingStep::Confirmation => format!(
            "Here's your booking: {} at {}, {} to {}, {} guest(s), under {}. Reply \"confirm\" to finish or \"cancel\" to abort.",
            session.room_type(),
            session.hotel_name(),
            session.check_in(),
            session.check_out(),
            session.guests(),
            session.guest_name(),
        ),
        BookingStep::Completed => format!(
            "This booking for {} at {} is already confirmed. Start a new session to book another stay.",
            session.guest_name(),
            session.hotel_name(),
        ),
    }
}
