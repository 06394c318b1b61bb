//! Request-scoped authenticated identity.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::jwt::TokenClaims;
use crate::error::AppError;

/// Identity resolved by the JWT gate, valid for the duration of one request.
/// Inserted into request extensions by the gate and discarded at request end.
#[derive(Debug, Clone, Serialize)]
pub struct AuthIdentity {
    pub username: String,
    pub is_admin: bool,
    pub issuer: String,
    /// Issued-at (seconds since epoch)
    pub issued_at: i64,
    /// Expiry (seconds since epoch)
    pub expires_at: i64,
}

impl From<TokenClaims> for AuthIdentity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            username: claims.sub,
            is_admin: claims.is_admin,
            issuer: claims.iss,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

impl FromRequest for AuthIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Present only when the JWT gate ran and accepted the token; a route
        // outside the protected scope asking for an identity gets a 401.
        ready(
            req.extensions()
                .get::<AuthIdentity>()
                .cloned()
                .ok_or_else(AppError::unauthorized_missing_bearer),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AuthIdentity;
    use crate::auth::jwt::TokenClaims;

    #[test]
    fn identity_mirrors_the_claims() {
        let claims = TokenClaims {
            sub: "admin".to_string(),
            is_admin: true,
            iss: "test-issuer".to_string(),
            iat: 1_000,
            exp: 1_900,
        };

        let identity = AuthIdentity::from(claims);
        assert_eq!(identity.username, "admin");
        assert!(identity.is_admin);
        assert_eq!(identity.issuer, "test-issuer");
        assert_eq!(identity.issued_at, 1_000);
        assert_eq!(identity.expires_at, 1_900);
    }
}
