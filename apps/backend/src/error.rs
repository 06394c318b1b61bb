use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Single-message error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One violated field constraint, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub key: String,
    pub error: String,
}

impl FieldError {
    pub fn new(key: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            error: error.into(),
        }
    }
}

/// Validation error body: `{"errors": [{"key": ..., "error": ...}, ...]}`.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldError>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation { errors: Vec<FieldError> },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("InvalidCredentials")]
    InvalidCredentials,
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    #[error("UnauthorizedBasic")]
    UnauthorizedBasic { realm: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedMissingBearer => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidJwt => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedExpiredJwt => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedBasic { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client. Server-side detail stays in the logs:
    /// 5xx bodies are generic, and expired vs. bad-signature tokens are not
    /// distinguished on the wire.
    fn client_detail(&self) -> String {
        match self {
            AppError::Validation { .. } => "Validation failed".to_string(),
            AppError::BadRequest { detail } => detail.clone(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::UnauthorizedMissingBearer => "Authorization header is missing".to_string(),
            AppError::UnauthorizedInvalidJwt => "Invalid or expired token".to_string(),
            AppError::UnauthorizedExpiredJwt => "Invalid or expired token".to_string(),
            AppError::UnauthorizedBasic { .. } => "Invalid credentials".to_string(),
            AppError::NotFound { detail } => detail.clone(),
            AppError::Db { .. } => "internal server error".to_string(),
            AppError::Internal { .. } => "internal server error".to_string(),
            AppError::Config { .. } => "internal server error".to_string(),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_jwt() -> Self {
        Self::UnauthorizedInvalidJwt
    }

    pub fn unauthorized_expired_jwt() -> Self {
        Self::UnauthorizedExpiredJwt
    }

    pub fn unauthorized_basic(realm: impl Into<String>) -> Self {
        Self::UnauthorizedBasic {
            realm: realm.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            error!(status = status.as_u16(), detail = %self, "request failed");
        }

        let mut builder = HttpResponse::build(status);

        if let AppError::UnauthorizedBasic { realm } = self {
            builder.insert_header((
                header::WWW_AUTHENTICATE,
                format!("Basic realm=\"{realm}\""),
            ));
        }

        match self {
            AppError::Validation { errors } => builder.json(ValidationErrorBody {
                errors: errors.clone(),
            }),
            _ => builder.json(ErrorBody {
                error: self.client_detail(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::{AppError, FieldError, ResponseError};

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(
            AppError::validation(vec![]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_credentials().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::unauthorized_expired_jwt().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::not_found("Video not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::db("connection lost").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn server_errors_do_not_leak_detail() {
        let err = AppError::db("SQLITE_BUSY: table videos is locked");
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(resp.into_body())
            .await
            .expect("body read");
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal server error");
    }

    #[test]
    fn basic_variant_carries_a_challenge_header() {
        let err = AppError::unauthorized_basic("videos");
        let resp = err.error_response();
        let challenge = resp
            .headers()
            .get(actix_web::http::header::WWW_AUTHENTICATE)
            .expect("challenge header present");
        assert_eq!(challenge.to_str().unwrap(), "Basic realm=\"videos\"");
    }

    #[test]
    fn expired_and_invalid_tokens_share_a_wire_message() {
        assert_eq!(
            AppError::unauthorized_expired_jwt().client_detail(),
            AppError::unauthorized_invalid_jwt().client_detail()
        );
    }

    #[test]
    fn field_error_serializes_with_key_and_error() {
        let fe = FieldError::new("title", "must be between 3 and 100 characters");
        let json = serde_json::to_value(&fe).unwrap();
        assert_eq!(json["key"], "title");
        assert_eq!(json["error"], "must be between 3 and 100 characters");
    }
}
