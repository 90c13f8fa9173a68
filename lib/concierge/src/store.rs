//! In-process storage for active booking sessions.

use crate::session::BookingSession;
use smartstay_core::BookingSessionId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keyed table of live booking sessions.
///
/// Safe for concurrent insert, lookup, and delete across independent
/// sessions. Writes to the same session are not coordinated: the last
/// write observed by the table wins. Sessions live only as long as the
/// process; nothing here survives a restart.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<BookingSessionId, BookingSession>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a session.
    pub async fn put(&self, session: BookingSession) {
        self.sessions
            .write()
            .await
            .insert(session.session_id(), session);
    }

    /// Looks up a session by ID.
    pub async fn get(&self, id: BookingSessionId) -> Option<BookingSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Removes a session, returning true if it existed.
    pub async fn remove(&self, id: BookingSessionId) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if no sessions are live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let store = SessionStore::new();
        let session = BookingSession::new("h1", "Aurora Bay Resort");
        let id = session.session_id();

        store.put(session.clone()).await;

        assert_eq!(store.get(id).await, Some(session));
    }

    #[tokio::test]
    async fn get_unknown_session_returns_none() {
        let store = SessionStore::new();
        assert_eq!(store.get(BookingSessionId::new()).await, None);
    }

    #[tokio::test]
    async fn put_replaces_existing_session() {
        let store = SessionStore::new();
        let mut session = BookingSession::new("h1", "Aurora Bay Resort");
        let id = session.session_id();
        store.put(session.clone()).await;

        session.fill_room_type("Deluxe Suite");
        store.put(session).await;

        let stored = store.get(id).await.expect("session exists");
        assert_eq!(stored.room_type(), "Deluxe Suite");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_deletes_the_session() {
        let store = SessionStore::new();
        let session = BookingSession::new("h2", "Skyline Atelier Hotel");
        let id = session.session_id();
        store.put(session).await;

        assert!(store.remove(id).await);
        assert_eq!(store.get(id).await, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_missing_session_returns_false() {
        let store = SessionStore::new();
        assert!(!store.remove(BookingSessionId::new()).await);
    }

    #[tokio::test]
    async fn independent_sessions_do_not_interfere() {
        let store = SessionStore::new();
        let first = BookingSession::new("h1", "Aurora Bay Resort");
        let second = BookingSession::new("h2", "Skyline Atelier Hotel");
        let first_id = first.session_id();
        let second_id = second.session_id();

        store.put(first).await;
        store.put(second).await;
        store.remove(first_id).await;

        assert_eq!(store.get(first_id).await, None);
        assert!(store.get(second_id).await.is_some());
    }
}
