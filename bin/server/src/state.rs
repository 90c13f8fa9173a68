//! Shared application state.

use chrono::Duration;
use smartstay_account::{TokenSigner, UserStore};
use smartstay_assist::ChatClient;
use smartstay_booking::BookingStore;
use smartstay_catalog::HotelStore;
use smartstay_concierge::SessionStore;
use std::sync::Arc;

/// Shared application state.
///
/// The stores are trait objects so the same handlers run against
/// Postgres or the in-memory fallback.
pub struct AppState {
    /// Hotel catalog.
    pub hotels: Arc<dyn HotelStore>,
    /// Registered users.
    pub users: Arc<dyn UserStore>,
    /// Stored bookings.
    pub bookings: Arc<dyn BookingStore>,
    /// Live booking dialogues. In-process only; sessions do not
    /// survive a restart.
    pub sessions: SessionStore,
    /// Access-token signer.
    pub signer: TokenSigner,
    /// Access-token lifetime.
    pub token_ttl: Duration,
    /// Chat client, present only when an API key is configured.
    pub assist: Option<ChatClient>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        hotels: Arc<dyn HotelStore>,
        users: Arc<dyn UserStore>,
        bookings: Arc<dyn BookingStore>,
        signer: TokenSigner,
        token_ttl: Duration,
        assist: Option<ChatClient>,
    ) -> Self {
        Self {
            hotels,
            users,
            bookings,
            sessions: SessionStore::new(),
            signer,
            token_ttl,
            assist,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> Arc<AppState> {
    use smartstay_account::MemoryUserStore;
    use smartstay_booking::MemoryBookingStore;
    use smartstay_catalog::MemoryHotelStore;

    Arc::new(AppState::new(
        Arc::new(MemoryHotelStore::new()),
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemoryBookingStore::new()),
        TokenSigner::new("test-secret"),
        Duration::hours(1),
        None,
    ))
}
