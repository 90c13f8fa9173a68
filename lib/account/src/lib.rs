//! User accounts for the smartstay platform.
//!
//! Covers the whole textbook auth stack: the user record, PBKDF2
//! password hashing, HMAC-signed access tokens, and the `UserStore`
//! lookup trait with an in-memory implementation.

pub mod error;
pub mod password;
pub mod store;
pub mod token;
pub mod user;

pub use error::AccountError;
pub use password::{hash_password, verify_password};
pub use store::{MemoryUserStore, UserStore};
pub use token::{TokenClaims, TokenSigner};
pub use user::{User, UserProfile, normalize_email};
