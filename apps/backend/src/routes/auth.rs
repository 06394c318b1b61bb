use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::jwt::issue_token;
use crate::error::{AppError, FieldError};
use crate::extractors::validated_json::ValidatedJson;
use crate::state::app_state::AppState;
use crate::validation::Validate;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Credentials carry no field constraints; only a body that fails to parse
// is a 400. The pair itself is judged by the credential store.
impl Validate for LoginRequest {
    fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Check the submitted credentials against the store and mint an access
/// token. The admin role flag is derived from the account name in this demo.
async fn login(
    req: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = req.into_inner();

    if !app_state.credentials.verify(&req.username, &req.password) {
        info!(username = %req.username, "login rejected");
        return Err(AppError::invalid_credentials());
    }

    let is_admin = req.username == "admin";
    let token = issue_token(&req.username, is_admin, SystemTime::now(), &app_state.security)?;

    info!(username = %req.username, is_admin, "login succeeded");
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/login").route(web::post().to(login)));
}
