use std::env;
use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Value of the `iss` claim on issued tokens
    pub issuer: String,
    /// Token lifetime
    pub expiry: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret, issuer and expiry
    pub fn new(jwt_secret: impl Into<Vec<u8>>, issuer: impl Into<String>, expiry: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            issuer: issuer.into(),
            expiry,
        }
    }

    /// Read JWT settings from the environment once at startup.
    ///
    /// `JWT_SECRET_KEY` and `JWT_ISSUER` fall back to demo placeholders when
    /// unset; `JWT_EXPIRY_MINS` falls back to 15 when unset or unparseable.
    pub fn from_env() -> Self {
        let secret =
            env::var("JWT_SECRET_KEY").unwrap_or_else(|_| "your-secret-key".to_string());
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "your-app-name".to_string());
        let expiry_mins = env::var("JWT_EXPIRY_MINS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(15);

        Self::new(
            secret.into_bytes(),
            issuer,
            Duration::from_secs(expiry_mins * 60),
        )
    }
}
