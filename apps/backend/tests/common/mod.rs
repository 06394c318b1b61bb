#![allow(dead_code)]

// Shared assertions for the integration suites.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Drive one request through the app and return `(status, json body)`.
///
/// Handler-level failures arrive as `Ok(response)`, but gate middleware
/// rejects by returning `Err` from the service, so both arms are folded into
/// the same shape here. An empty body maps to `Value::Null`.
pub async fn call_json<S, B>(app: &S, req: Request) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
    B::Error: std::fmt::Debug,
{
    match app.call(req).await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let body = test::read_body(resp).await;
            let json = if body.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&body).expect("response body should be JSON")
            };
            (status, json)
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status().as_u16();
            let body = actix_web::body::to_bytes(resp.into_body())
                .await
                .expect("error body should be readable");
            let json = serde_json::from_slice(&body).expect("error body should be JSON");
            (status, json)
        }
    }
}

/// Collect the `key` values from a `{"errors": [{key, error}, ...]}` body.
pub fn validation_keys(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["key"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
