use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SIGNING_KEY_BYTES: usize = 64;

/// The authenticated caller, as carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub mail: String,
    pub user_id: i64,
    pub role_id: i64,
}

/// Claims written into every issued token.
#[derive(Debug, Serialize)]
struct Claims<'a> {
    mail: &'a str,
    user_id: i64,
    role_id: i64,
    exp: i64,
}

/// Claims as read back. Identity claims are optional so a well-signed token
/// lacking one of them can be told apart from a forged one.
#[derive(Debug, Deserialize)]
struct ParsedClaims {
    mail: Option<String>,
    user_id: Option<i64>,
    role_id: Option<i64>,
}

/// Why a presented token was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Bad signature, wrong algorithm or not a token at all.
    Invalid,
    Expired,
    /// Signed by us but missing an identity claim.
    MissingClaims,
}

/// Signs and verifies HS256 session tokens.
///
/// The key lives only in memory, so restarting the server invalidates
/// every outstanding session.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenSigner {
    /// Creates a signer with a freshly generated random key.
    #[must_use]
    pub fn random(ttl: Duration) -> Self {
        let mut secret = [0u8; SIGNING_KEY_BYTES];
        rand::thread_rng().fill_bytes(&mut secret);
        Self::from_secret(&secret, ttl)
    }

    #[must_use]
    pub fn from_secret(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for the identity, valid for the configured lifetime.
    pub fn issue(&self, identity: &Identity) -> Result<String> {
        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or(Error::TokenLifetime)?;
        self.issue_until(identity, expires_at)
    }

    fn issue_until(&self, identity: &Identity, expires_at: chrono::DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            mail: &identity.mail,
            user_id: identity.user_id,
            role_id: identity.role_id,
            exp: expires_at.timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verifies the signature and expiry of a token and extracts the identity.
    pub fn verify(&self, token: &str) -> std::result::Result<Identity, TokenRejection> {
        let data = decode::<ParsedClaims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenRejection::Expired,
                ErrorKind::MissingRequiredClaim(_) => TokenRejection::MissingClaims,
                _ => TokenRejection::Invalid,
            }
        })?;

        let ParsedClaims {
            mail,
            user_id,
            role_id,
        } = data.claims;

        match (mail, user_id, role_id) {
            (Some(mail), Some(user_id), Some(role_id)) => Ok(Identity {
                mail,
                user_id,
                role_id,
            }),
            _ => Err(TokenRejection::MissingClaims),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            mail: "admin@mydb".to_string(),
            user_id: 1,
            role_id: 1,
        }
    }

    fn signer() -> TokenSigner {
        TokenSigner::from_secret(b"test-secret", Duration::hours(1))
    }

    #[test]
    fn test_issue_and_verify() {
        let signer = signer();
        let token = signer.issue(&identity()).unwrap();

        assert_eq!(signer.verify(&token).unwrap(), identity());
    }

    #[test]
    fn test_token_from_other_key_is_invalid() {
        let token = TokenSigner::random(Duration::hours(1))
            .issue(&identity())
            .unwrap();

        assert_eq!(signer().verify(&token), Err(TokenRejection::Invalid));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(signer().verify("not-a-token"), Err(TokenRejection::Invalid));
        assert_eq!(signer().verify(""), Err(TokenRejection::Invalid));
    }

    #[test]
    fn test_expired_token() {
        let signer = signer();
        let token = signer
            .issue_until(&identity(), Utc::now() - Duration::hours(2))
            .unwrap();

        assert_eq!(signer.verify(&token), Err(TokenRejection::Expired));
    }

    #[test]
    fn test_missing_identity_claim() {
        #[derive(Serialize)]
        struct Partial {
            mail: &'static str,
            exp: i64,
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &Partial {
                mail: "admin@mydb",
                exp: (Utc::now() + Duration::hours(1)).timestamp(),
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(signer().verify(&token), Err(TokenRejection::MissingClaims));
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let signer = TokenSigner::from_secret(b"test-secret", Duration::hours(3_000_000_000));
        assert!(matches!(signer.issue(&identity()), Err(Error::TokenLifetime)));
    }

    #[test]
    fn test_random_signers_differ() {
        let a = TokenSigner::random(Duration::hours(1));
        let b = TokenSigner::random(Duration::hours(1));
        let token = a.issue(&identity()).unwrap();

        assert!(a.verify(&token).is_ok());
        assert!(b.verify(&token).is_err());
    }
}
