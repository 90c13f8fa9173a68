//! Error types for the account crate.

use smartstay_core::UserId;
use std::fmt;

/// Errors from account operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The email address is already registered.
    EmailTaken { email: String },
    /// Email/password pair does not match a registered user.
    InvalidCredentials,
    /// User not found.
    UserNotFound { id: UserId },
    /// Token is malformed or its signature does not verify.
    InvalidToken { reason: String },
    /// Token verified but has expired.
    TokenExpired,
    /// A stored password hash could not be parsed.
    BadPasswordHash { reason: String },
    /// Storage operation failed.
    StorageFailed { reason: String },
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmailTaken { email } => write!(f, "email already registered: {email}"),
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::UserNotFound { id } => write!(f, "user not found: {id}"),
            Self::InvalidToken { reason } => write!(f, "invalid token: {reason}"),
            Self::TokenExpired => write!(f, "token expired"),
            Self::BadPasswordHash { reason } => {
                write!(f, "stored password hash is unusable: {reason}")
            }
            Self::StorageFailed { reason } => {
                write!(f, "account storage failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AccountError {}
