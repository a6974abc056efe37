//! Signed bearer tokens.
//!
//! Login answers with a JWT whose claims carry the user id, username, and
//! admin flag. The admin extractors trust the signature alone; there is no
//! server-side session state to invalidate.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rcolly_core::UserId;

use crate::models::User;

/// Token lifetime.
const TOKEN_TTL_DAYS: i64 = 7;

/// Errors that can occur when issuing or verifying tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing or serialization failed.
    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    /// Signature, shape, or expiry check failed.
    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// Claims embedded in a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: UserId,
    /// Login name at issue time.
    pub username: String,
    /// Admin flag at issue time.
    pub is_admin: bool,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiry (unix seconds).
    pub exp: i64,
}

/// Issues and verifies signed bearer tokens (HS256).
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a token for a user.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the signature is wrong, the token
    /// is malformed, or it has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rcolly_core::Email;

    fn test_user(is_admin: bool) -> User {
        User {
            id: UserId::new(7),
            username: "shopper".to_string(),
            email: Email::parse("shopper@example.com").unwrap(),
            is_admin,
            created_at: Utc::now(),
        }
    }

    fn service() -> TokenService {
        TokenService::new(&SecretString::from("k9#mQ2$vX7!pL4@wZ8%nR3^tB6&yD1*f"))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = service();
        let token = tokens.issue(&test_user(true)).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, UserId::new(7));
        assert_eq!(claims.username, "shopper");
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_other_key() {
        let token = service().issue(&test_user(false)).unwrap();

        let other = TokenService::new(&SecretString::from("z1!aW5@eS9#dF3$gH7%jK2^lM6&xC0*v"));
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(matches!(
            service().verify("not.a.token"),
            Err(TokenError::Invalid(_))
        ));
    }
}
