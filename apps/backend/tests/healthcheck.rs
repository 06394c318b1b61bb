// Integration test for the health endpoint.

mod common;
mod support;

use actix_web::test;

use crate::common::call_json;
use crate::support::test_app;

#[actix_web::test]
async fn health_reports_ok_with_a_reachable_store() {
    let state = support::test_state().await;
    let app = test_app!(state).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let (status, body) = call_json(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().unwrap().contains('T'));
}
