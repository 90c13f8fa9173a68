//! Conversational booking flow for the smartstay platform.
//!
//! A booking session is a multi-turn slot-filling dialogue: room type,
//! then dates, then guest count, then guest name, then confirmation.
//! Free-text replies are parsed with best-effort pattern matching; the
//! current step is always derived from which slots are filled, never
//! stored independently of them.

pub mod dialogue;
pub mod extract;
pub mod session;
pub mod store;

pub use dialogue::{AdvanceOutcome, CANCELLED_REPLY, advance, step_prompt};
pub use extract::{extract_date_range, extract_guest_count, extract_guest_name, extract_room_type};
pub use session::{BookingSession, BookingStep, resolve_step};
pub use store::SessionStore;
