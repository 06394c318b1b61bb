use actix_web::{web, App, HttpServer};
use backend::auth::credentials::CredentialStore;
use backend::config::db::db_url;
use backend::infra::db::{connect_db, ensure_schema};
use backend::middleware::cors::cors_middleware;
use backend::middleware::jwt_extract::JwtExtract;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let security = SecurityConfig::from_env();
    let credentials = CredentialStore::seeded();

    let url = match db_url() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Failed to resolve database location: {e}");
            std::process::exit(1);
        }
    };

    let db = match connect_db(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = ensure_schema(&db).await {
        eprintln!("Failed to create database schema: {e}");
        std::process::exit(1);
    }

    tracing::info!(%host, port, "starting video backend");

    let data = web::Data::new(AppState::new(db, security, credentials));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(
                web::scope("/api")
                    .wrap(JwtExtract)
                    .configure(routes::videos::configure_routes),
            )
            .configure(routes::configure_public)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
