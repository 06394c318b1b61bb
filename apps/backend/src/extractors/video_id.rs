use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;

/// Video ID extracted from the `{id}` route path parameter.
///
/// A missing or non-UUID value is rejected with a 400 in our JSON error
/// shape before the handler runs; existence is checked by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoId(pub Uuid);

impl FromRequest for VideoId {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = match req.match_info().get("id") {
            Some(raw) => raw
                .parse::<Uuid>()
                .map(VideoId)
                .map_err(|_| AppError::bad_request(format!("Invalid video id: {raw}"))),
            None => Err(AppError::bad_request("Missing id parameter")),
        };

        ready(parsed)
    }
}
