#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

// Re-exports for public API
pub use auth::credentials::CredentialStore;
pub use auth::jwt::{issue_token, validate_token, AuthError, TokenClaims};
pub use error::{AppError, FieldError};
pub use extractors::auth_identity::AuthIdentity;
pub use extractors::validated_json::ValidatedJson;
pub use extractors::video_id::VideoId;
pub use infra::db::{connect_db, ensure_schema};
pub use middleware::basic_auth::BasicAuth;
pub use middleware::cors::cors_middleware;
pub use middleware::jwt_extract::JwtExtract;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
