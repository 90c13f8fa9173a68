//! Core domain types for the smartstay platform.
//!
//! This crate provides the strongly-typed identifiers shared by the
//! rest of the smartstay hotel-booking service.

pub mod id;

pub use id::{BookingId, BookingReference, BookingSessionId, UserId};
