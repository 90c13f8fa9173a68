//! Signed access tokens.
//!
//! Tokens are JWT-shaped: `header.claims.signature`, each part
//! base64url without padding, signed with HMAC-SHA256 over the first
//! two parts. Claims carry the user ID, issue time, and expiry.

use crate::error::AccountError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use smartstay_core::UserId;

type HmacSha256 = Hmac<Sha256>;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Claims carried inside an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// The user the token was issued to, in `usr_<ulid>` form.
    pub sub: String,
    /// Issue time, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Parses the subject back into a user ID.
    pub fn user_id(&self) -> Result<UserId, AccountError> {
        self.sub.parse().map_err(|_| AccountError::InvalidToken {
            reason: format!("subject is not a user id: {}", self.sub),
        })
    }
}

/// Issues and verifies access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    /// Creates a signer over the given secret.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issues a token for a user, valid for `ttl` from now.
    #[must_use]
    pub fn issue(&self, user_id: UserId, ttl: Duration) -> String {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let header = URL_SAFE_NO_PAD.encode(HEADER);
        let claims_json = serde_json::to_string(&claims).expect("claims serialize to JSON");
        let payload = format!("{header}.{}", URL_SAFE_NO_PAD.encode(claims_json));
        let signature = URL_SAFE_NO_PAD.encode(self.sign(payload.as_bytes()));
        format!("{payload}.{signature}")
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AccountError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token against an explicit clock reading.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AccountError> {
        let mut parts = token.split('.');
        let (Some(header), Some(claims), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected three dot-separated parts"));
        };

        let payload = format!("{header}.{claims}");
        let given = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| invalid("signature is not valid base64url"))?;
        let expected = self.sign(payload.as_bytes());
        if !constant_time_eq(&given, &expected) {
            return Err(invalid("signature mismatch"));
        }

        let claims_json = URL_SAFE_NO_PAD
            .decode(claims)
            .map_err(|_| invalid("claims are not valid base64url"))?;
        let claims: TokenClaims = serde_json::from_slice(&claims_json)
            .map_err(|_| invalid("claims are not valid JSON"))?;

        if now.timestamp() >= claims.exp {
            return Err(AccountError::TokenExpired);
        }

        Ok(claims)
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any length");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

fn invalid(reason: &str) -> AccountError {
    AccountError::InvalidToken {
        reason: reason.to_string(),
    }
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
