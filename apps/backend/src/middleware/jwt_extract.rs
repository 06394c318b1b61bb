//! JWT authentication gate.
//!
//! Wraps the protected `/api` scope. Extracts the Bearer token from the
//! Authorization header, validates it against the configured secret, and
//! stores the resolved identity in request extensions. Any failure answers
//! 401 and the wrapped service never runs.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::auth::jwt::{validate_token, AuthError};
use crate::error::AppError;
use crate::extractors::auth_identity::AuthIdentity;
use crate::state::app_state::AppState;

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();
        let app_state = req.app_data::<web::Data<AppState>>().cloned();

        let token = match extract_bearer_from_header(auth_header.as_ref()) {
            Ok(token) => token,
            Err(err) => {
                return Box::pin(async move { Err(err.into()) });
            }
        };

        let app_state = match app_state {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available").into())
                });
            }
        };

        match validate_token(&token, &app_state.security) {
            Ok(claims) => {
                // Store the identity in request extensions BEFORE calling
                // the wrapped service so extractors can pick it up.
                req.extensions_mut().insert(AuthIdentity::from(claims));

                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(err) => {
                warn!(path = %req.path(), reason = %err, "token rejected");
                let app_err = match err {
                    AuthError::Expired => AppError::unauthorized_expired_jwt(),
                    _ => AppError::unauthorized_invalid_jwt(),
                };
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is checked explicitly: the header must split into exactly two
/// whitespace-separated parts with a literal `Bearer` first and a non-empty
/// token second. No blind prefix slicing.
fn extract_bearer_from_header(
    header_value: Option<&header::HeaderValue>,
) -> Result<String, AppError> {
    let auth_value = match header_value {
        Some(value) => value,
        None => return Err(AppError::unauthorized_missing_bearer()),
    };

    let auth_str = auth_value
        .to_str()
        .map_err(|_| AppError::unauthorized_invalid_jwt())?;

    let parts: Vec<&str> = auth_str.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
        return Err(AppError::unauthorized_invalid_jwt());
    }

    Ok(parts[1].to_string())
}
