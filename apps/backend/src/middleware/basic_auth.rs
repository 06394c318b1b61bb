//! HTTP Basic authentication gate.
//!
//! The earlier-revision counterpart of the JWT gate: one configured
//! username/password pair checked per request via the standard Basic
//! challenge/response. A mismatch answers 401 with a `WWW-Authenticate`
//! challenge so browsers prompt for credentials.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::Error;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::error::AppError;

pub struct BasicAuth {
    username: String,
    password: String,
    realm: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            realm: "Restricted".to_string(),
        }
    }

    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for BasicAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BasicAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BasicAuthMiddleware {
            service,
            username: self.username.clone(),
            password: self.password.clone(),
            realm: self.realm.clone(),
        }))
    }
}

pub struct BasicAuthMiddleware<S> {
    service: S,
    username: String,
    password: String,
    realm: String,
}

impl<S, B> Service<ServiceRequest> for BasicAuthMiddleware<S>
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
        let authorized = decode_basic_pair(req.headers().get(header::AUTHORIZATION))
            .is_some_and(|(user, pass)| user == self.username && pass == self.password);

        if !authorized {
            let challenge = AppError::unauthorized_basic(self.realm.clone());
            return Box::pin(async move { Err(challenge.into()) });
        }

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}

/// Decode `Authorization: Basic <base64(user:pass)>` into its pair.
/// Any malformation yields None; the caller treats it as a failed attempt.
fn decode_basic_pair(header_value: Option<&header::HeaderValue>) -> Option<(String, String)> {
    let auth_str = header_value?.to_str().ok()?;
    let encoded = auth_str.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}
