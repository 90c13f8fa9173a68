//! Postgres-backed user store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use smartstay_account::{AccountError, User, UserStore, normalize_email};
use smartstay_core::UserId;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

/// Row type for user queries.
#[derive(FromRow)]
struct UserRow {
    id: String,
    full_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn try_into_user(self) -> Result<User, AccountError> {
        let id = UserId::from_str(&self.id).map_err(|e| AccountError::StorageFailed {
            reason: format!("invalid user id '{}': {}", self.id, e),
        })?;
        Ok(User::with_all_fields(
            id,
            self.full_name,
            self.email,
            self.password_hash,
            self.created_at,
        ))
    }
}

/// Postgres-backed user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Creates a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: User) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, full_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id().to_string())
        .bind(user.full_name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.created_at())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AccountError::EmailTaken {
                    email: user.email().to_string(),
                })
            }
            Err(e) => Err(AccountError::StorageFailed {
                reason: e.to_string(),
            }),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let email = normalize_email(email);
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, full_name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(&email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::StorageFailed {
            reason: e.to_string(),
        })?;

        match row {
            Some(row) => Ok(Some(row.try_into_user()?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AccountError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, full_name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::StorageFailed {
            reason: e.to_string(),
        })?;

        match row {
            Some(row) => Ok(Some(row.try_into_user()?)),
            None => Ok(None),
        }
    }
}
