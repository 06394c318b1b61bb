use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims carried by our access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenClaims {
    /// Username the token was issued for
    pub sub: String,
    pub is_admin: bool,
    pub iss: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Why a token was rejected. Never sent to the client verbatim; the gate
/// collapses all of these into a generic 401.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

/// Mint a signed access token for the given user.
///
/// Expiry and issuer come from the config; the only failure mode is the
/// signing step itself (e.g. a misconfigured key), never a business rule.
pub fn issue_token(
    username: &str,
    is_admin: bool,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + security.expiry.as_secs() as i64;

    let claims = TokenClaims {
        sub: username.to_string(),
        is_admin,
        iss: security.issuer.clone(),
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token and return its claims.
///
/// The algorithm is pinned to the configured one, so a token re-signed under
/// a different scheme fails outright instead of downgrading verification.
pub fn validate_token(token: &str, security: &SecurityConfig) -> Result<TokenClaims, AuthError> {
    // Default Validation already checks exp.
    let validation = Validation::new(security.algorithm);

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use jsonwebtoken::Algorithm;

    use super::{issue_token, validate_token, AuthError};
    use crate::state::security_config::SecurityConfig;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new(
            "test_secret_key_for_testing_purposes_only".as_bytes(),
            "test-issuer",
            Duration::from_secs(15 * 60),
        )
    }

    #[test]
    fn issue_and_validate_roundtrip() {
        let security = test_security();
        let now = SystemTime::now();

        let token = issue_token("admin", true, now, &security).unwrap();
        let claims = validate_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "admin");
        assert!(claims.is_admin);
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + 15 * 60);
    }

    #[test]
    fn non_admin_flag_survives_the_roundtrip() {
        let security = test_security();
        let token = issue_token("user", false, SystemTime::now(), &security).unwrap();
        let claims = validate_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "user");
        assert!(!claims.is_admin);
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = test_security();

        // 20 minutes ago, so a 15-minute token is well past the decoder's
        // leeway window.
        let past = SystemTime::now() - Duration::from_secs(20 * 60);
        let token = issue_token("admin", true, past, &security).unwrap();

        assert_eq!(validate_token(&token, &security), Err(AuthError::Expired));
    }

    #[test]
    fn wrong_secret_is_rejected_as_bad_signature() {
        let security_a = SecurityConfig::new(
            "secret-A".as_bytes(),
            "test-issuer",
            Duration::from_secs(15 * 60),
        );
        let security_b = SecurityConfig::new(
            "secret-B".as_bytes(),
            "test-issuer",
            Duration::from_secs(15 * 60),
        );

        let token = issue_token("admin", true, SystemTime::now(), &security_a).unwrap();

        assert_eq!(
            validate_token(&token, &security_b),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn different_signing_algorithm_is_rejected() {
        let mut hs384 = test_security();
        hs384.algorithm = Algorithm::HS384;

        let token = issue_token("admin", true, SystemTime::now(), &hs384).unwrap();

        // Verifier pins HS256; the HS384 token must not pass.
        assert!(validate_token(&token, &test_security()).is_err());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let security = test_security();
        let token = issue_token("admin", true, SystemTime::now(), &security).unwrap();

        // Flip one character in the payload segment.
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let payload = &mut parts[1];
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        payload.replace_range(0..1, flipped);
        let tampered = parts.join(".");

        assert!(validate_token(&tampered, &security).is_err());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let security = test_security();
        let token = issue_token("admin", true, SystemTime::now(), &security).unwrap();

        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let sig = &mut parts[2];
        let flipped = if sig.starts_with('A') { "B" } else { "A" };
        sig.replace_range(0..1, flipped);
        let tampered = parts.join(".");

        assert_eq!(
            validate_token(&tampered, &security),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn garbage_input_is_malformed() {
        let security = test_security();
        assert_eq!(
            validate_token("not-a-token", &security),
            Err(AuthError::Malformed)
        );
        assert_eq!(validate_token("", &security), Err(AuthError::Malformed));
    }
}
