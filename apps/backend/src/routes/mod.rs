use actix_web::web;

pub mod auth;
pub mod health;
pub mod videos;
pub mod view;

/// Routes that are reachable without authentication. The video CRUD routes
/// are wired separately so `main.rs` (and the test suites) can wrap them in
/// the JWT gate.
pub fn configure_public(cfg: &mut web::ServiceConfig) {
    auth::configure_routes(cfg);
    health::configure_routes(cfg);
    view::configure_routes(cfg);
}
