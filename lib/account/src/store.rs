//! User lookup trait and the in-memory implementation.

use crate::error::AccountError;
use crate::user::{User, normalize_email};
use async_trait::async_trait;
use smartstay_core::UserId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage for registered users.
///
/// Emails are unique per account, compared in normalized form.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Adds a new user. Fails with [`AccountError::EmailTaken`] when
    /// the email is already registered.
    async fn create(&self, user: User) -> Result<(), AccountError>;

    /// Looks up a user by email, in any casing.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;

    /// Looks up a user by ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AccountError>;
}

/// In-memory user table.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: User) -> Result<(), AccountError> {
        let mut users = self.users.write().await;
        let email = normalize_email(user.email());
        if users.values().any(|existing| existing.email() == email) {
            return Err(AccountError::EmailTaken { email });
        }
        users.insert(user.id(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let email = normalize_email(email);
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AccountError> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user(email: &str) -> User {
        User::new("Alex Johnson", normalize_email(email), "hash")
    }

    #[tokio::test]
    async fn create_then_find_by_email() {
        let store = MemoryUserStore::new();
        let user = demo_user("alex@example.com");
        let id = user.id();
        store.create(user).await.expect("create");

        let found = store
            .find_by_email("alex@example.com")
            .await
            .expect("lookup")
            .expect("user exists");
        assert_eq!(found.id(), id);
    }

    #[tokio::test]
    async fn email_lookup_ignores_case() {
        let store = MemoryUserStore::new();
        store
            .create(demo_user("alex@example.com"))
            .await
            .expect("create");

        let found = store
            .find_by_email("Alex@Example.COM")
            .await
            .expect("lookup");
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryUserStore::new();
        store
            .create(demo_user("alex@example.com"))
            .await
            .expect("create");

        let err = store
            .create(demo_user("alex@example.com"))
            .await
            .expect_err("duplicate");
        assert!(matches!(err, AccountError::EmailTaken { .. }));
    }

    #[tokio::test]
    async fn find_by_id() {
        let store = MemoryUserStore::new();
        let user = demo_user("priya@example.com");
        let id = user.id();
        store.create(user).await.expect("create");

        assert!(store.find_by_id(id).await.expect("lookup").is_some());
        assert!(
            store
                .find_by_id(UserId::new())
                .await
                .expect("lookup")
                .is_none()
        );
    }
}
