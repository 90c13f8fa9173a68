//! Postgres implementations of the storage traits.
//!
//! Each store wraps a [`sqlx::PgPool`] and maps rows into the domain
//! types. The server falls back to the in-memory stores when no
//! `DATABASE_URL` is configured, so everything here stays behind the
//! same traits the memory implementations satisfy.

pub mod booking;
pub mod hotel;
pub mod user;

pub use booking::PgBookingStore;
pub use hotel::PgHotelStore;
pub use user::PgUserStore;
