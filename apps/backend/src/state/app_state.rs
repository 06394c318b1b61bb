use sea_orm::DatabaseConnection;

use crate::auth::credentials::CredentialStore;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Built once in `main` and cloned into each worker; everything in here is
/// read-only after startup, so no locking is involved.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Login credential mapping
    pub credentials: CredentialStore,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        security: SecurityConfig,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            db,
            security,
            credentials,
        }
    }
}
