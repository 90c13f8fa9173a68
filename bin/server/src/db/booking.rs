//! Postgres-backed booking store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use smartstay_booking::{Booking, BookingError, BookingStore};
use smartstay_core::BookingId;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

/// Row type for booking queries.
#[derive(FromRow)]
struct BookingRow {
    id: String,
    name: String,
    email: String,
    hotel_id: String,
    room_type: String,
    check_in: String,
    check_out: String,
    guests: i32,
    total: i64,
    user_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl BookingRow {
    fn try_into_booking(self) -> Result<Booking, BookingError> {
        let id = BookingId::from_str(&self.id).map_err(|e| BookingError::StorageFailed {
            reason: format!("invalid booking id '{}': {}", self.id, e),
        })?;
        Ok(Booking {
            id,
            name: self.name,
            email: self.email,
            hotel_id: self.hotel_id,
            room_type: self.room_type,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: u32::try_from(self.guests).unwrap_or_default(),
            total: u64::try_from(self.total).unwrap_or_default(),
            user_id: self.user_id,
            created_at: self.created_at,
        })
    }
}

/// Postgres-backed booking store.
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    /// Creates a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn create(&self, booking: Booking) -> Result<(), BookingError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (id, name, email, hotel_id, room_type, check_in,
                                  check_out, guests, total, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.hotel_id)
        .bind(&booking.room_type)
        .bind(&booking.check_in)
        .bind(&booking.check_out)
        .bind(i32::try_from(booking.guests).unwrap_or_default())
        .bind(i64::try_from(booking.total).unwrap_or_default())
        .bind(&booking.user_id)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::StorageFailed {
            reason: e.to_string(),
        })?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, hotel_id, room_type, check_in, check_out,
                   guests, total, user_id, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookingError::StorageFailed {
            reason: e.to_string(),
        })?;

        rows.into_iter()
            .map(BookingRow::try_into_booking)
            .collect()
    }
}
