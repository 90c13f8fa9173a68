//! Password hashing via PBKDF2-HMAC-SHA256.
//!
//! Hashes are stored as `pbkdf2-sha256$<iterations>$<salt>$<hash>`
//! with the salt and hash base64-encoded, so the iteration count can
//! be raised later without invalidating existing records.

use crate::error::AccountError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use hmac::Hmac;
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Iteration count applied to newly created hashes.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Hashes a password with a fresh random salt.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    let key = derive_key(password, &salt, PBKDF2_ITERATIONS);
    format!(
        "{SCHEME}${PBKDF2_ITERATIONS}${}${}",
        B64.encode(salt),
        B64.encode(key)
    )
}

/// Checks a password against a stored hash string.
///
/// Returns `Ok(false)` for a wrong password; `Err` only when the
/// stored string itself cannot be parsed.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AccountError> {
    let parts: Vec<&str> = stored.split('$').collect();
    let [scheme, iterations, salt, hash] = parts.as_slice() else {
        return Err(bad_hash("expected four $-separated fields"));
    };

    if *scheme != SCHEME {
        return Err(bad_hash(&format!("unknown scheme {scheme}")));
    }
    let iterations: u32 = iterations
        .parse()
        .map_err(|_| bad_hash("iteration count is not a number"))?;
    let salt = B64
        .decode(salt)
        .map_err(|_| bad_hash("salt is not valid base64"))?;
    let expected = B64
        .decode(hash)
        .map_err(|_| bad_hash("hash is not valid base64"))?;

    let actual = derive_key(password, &salt, iterations);
    Ok(constant_time_eq(&actual, &expected))
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<HmacSha256>(password.as_bytes(), salt, iterations, &mut key)
        .expect("PBKDF2 output length is valid");
    key
}

/// Byte comparison that does not short-circuit on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

fn bad_hash(reason: &str) -> AccountError {
    AccountError::BadPasswordHash {
        reason: reason.to_string(),
    }
}
