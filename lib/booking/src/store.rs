//! Booking storage trait and the in-memory implementation.

use crate::booking::Booking;
use crate::error::BookingError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage for booking records.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persists a booking record.
    async fn create(&self, booking: Booking) -> Result<(), BookingError>;

    /// Returns the given user's bookings, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, BookingError>;
}

/// In-memory booking list.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn create(&self, booking: Booking) -> Result<(), BookingError> {
        self.bookings.write().await.push(booking);
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        let bookings = self.bookings.read().await;
        let mut matched: Vec<Booking> = bookings
            .iter()
            .filter(|booking| booking.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}
