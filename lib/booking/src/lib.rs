//! Booking records for the smartstay platform.
//!
//! A booking is a plain record of a reservation request: guest
//! details, hotel, room, dates, and total. Records are write-once and
//! listed per user, newest first.

pub mod booking;
pub mod error;
pub mod store;

pub use booking::Booking;
pub use error::BookingError;
pub use store::{BookingStore, MemoryBookingStore};
