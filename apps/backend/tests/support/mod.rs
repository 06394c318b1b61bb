#![allow(dead_code)]

// Builders shared by the integration suites: in-memory app state, token
// minting, and the test app macro.

use std::time::{Duration, SystemTime};

use backend::auth::credentials::CredentialStore;
use backend::infra::db::ensure_schema;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use sea_orm::{ConnectOptions, Database};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(
        TEST_SECRET.as_bytes(),
        "test-issuer",
        Duration::from_secs(15 * 60),
    )
}

/// Fresh AppState over an in-memory SQLite store with the schema applied.
///
/// The pool is pinned to one connection: every pooled SQLite `:memory:`
/// connection would otherwise open its own empty database.
pub async fn test_state() -> AppState {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("in-memory sqlite should connect");
    ensure_schema(&db).await.expect("schema should apply");

    AppState::new(db, test_security(), CredentialStore::seeded())
}

/// A token the gate accepts, minted directly against the test config.
pub fn mint_test_token(state: &AppState, username: &str, is_admin: bool) -> String {
    backend::issue_token(username, is_admin, SystemTime::now(), &state.security)
        .expect("token should mint")
}

/// A token whose expiry is already behind us.
pub fn mint_expired_token(state: &AppState, username: &str) -> String {
    let past = SystemTime::now() - Duration::from_secs(60 * 60);
    backend::issue_token(username, false, past, &state.security).expect("token should mint")
}

/// Build the test app with the production wiring: video CRUD behind the JWT
/// gate under `/api`, everything else public.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .service(
                    actix_web::web::scope("/api")
                        .wrap(backend::middleware::jwt_extract::JwtExtract)
                        .configure(backend::routes::videos::configure_routes),
                )
                .configure(backend::routes::configure_public),
        )
    };
}

pub(crate) use test_app;
