//! User domain type and the public profile view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartstay_core::UserId;

/// A registered user.
///
/// Carries the password hash, so the struct itself never goes out on
/// the wire; handlers send the [`UserProfile`] view instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    full_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a generated ID.
    ///
    /// The email should already be normalized via [`normalize_email`];
    /// the hash comes from [`crate::password::hash_password`].
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            full_name: full_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates a user with all fields specified.
    ///
    /// Use this when reconstituting a user from storage.
    #[must_use]
    pub fn with_all_fields(
        id: UserId,
        full_name: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name,
            email,
            password_hash,
            created_at,
        }
    }

    /// Returns the user's ID.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the user's normalized email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the stored password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns when the account was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the public view of this account.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public account view sent to the client. Never includes the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
}

/// Canonical form of an email address for storage and lookup.
///
/// Addresses are compared case-insensitively, so both registration and
/// login normalize through here.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_generated_id() {
        let user = User::new("Alex Johnson", "alex@example.com", "hash");
        assert!(user.id().to_string().starts_with("usr_"));
        assert_eq!(user.full_name(), "Alex Johnson");
        assert_eq!(user.email(), "alex@example.com");
    }

    #[test]
    fn profile_carries_no_hash() {
        let user = User::new("Alex Johnson", "alex@example.com", "secret-hash");
        let json = serde_json::to_value(user.profile()).expect("serialize");

        assert_eq!(json["fullName"], "Alex Johnson");
        assert_eq!(json["email"], "alex@example.com");
        assert!(json["id"].is_string());
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(3));
    }

    #[test]
    fn with_all_fields_preserves_values() {
        let id = UserId::new();
        let created = Utc::now() - chrono::Duration::days(7);
        let user = User::with_all_fields(
            id,
            "Priya N".to_string(),
            "priya@example.com".to_string(),
            "hash".to_string(),
            created,
        );

        assert_eq!(user.id(), id);
        assert_eq!(user.created_at(), created);
        assert_eq!(user.password_hash(), "hash");
    }

    #[test]
    fn email_normalization() {
        assert_eq!(normalize_email("  Alex@Example.COM "), "alex@example.com");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
    }
}
