//! Video CRUD routes. All of these sit behind the JWT gate.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, FieldError};
use crate::extractors::auth_identity::AuthIdentity;
use crate::extractors::validated_json::ValidatedJson;
use crate::extractors::video_id::VideoId;
use crate::repos::videos::{NewPerson, NewVideo, Video};
use crate::services::videos as video_service;
use crate::state::app_state::AppState;
use crate::validation::{
    check_email, check_length, check_max_length, check_range, check_url, Validate,
};

#[derive(Debug, Deserialize)]
pub struct PersonPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub email: String,
}

/// Create and update share this payload: IDs and timestamps are always
/// server-generated, so the wire shape never carries them inbound.
#[derive(Debug, Deserialize)]
pub struct VideoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    pub author: PersonPayload,
}

impl Validate for VideoPayload {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_length(&mut errors, "title", &self.title, 3, 100);
        check_max_length(&mut errors, "description", &self.description, 500);
        check_url(&mut errors, "url", &self.url);
        check_length(&mut errors, "author.name", &self.author.name, 2, 50);
        check_range(&mut errors, "author.age", self.author.age, 0, 120);
        check_email(&mut errors, "author.email", &self.author.email);
        errors
    }
}

impl From<VideoPayload> for NewVideo {
    fn from(payload: VideoPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            url: payload.url,
            author: NewPerson {
                name: payload.author.name,
                age: payload.author.age,
                email: payload.author.email,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

async fn save(
    identity: AuthIdentity,
    payload: ValidatedJson<VideoPayload>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Video>, AppError> {
    debug!(user = %identity.username, "create video requested");
    let video = video_service::save_video(&app_state.db, payload.into_inner().into()).await?;
    Ok(web::Json(video))
}

async fn get_all(app_state: web::Data<AppState>) -> Result<web::Json<Vec<Video>>, AppError> {
    let videos = video_service::list_videos(&app_state.db).await?;
    Ok(web::Json(videos))
}

async fn get_by_id(
    id: VideoId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Video>, AppError> {
    let video = video_service::get_video(&app_state.db, id.0).await?;
    Ok(web::Json(video))
}

async fn update(
    identity: AuthIdentity,
    id: VideoId,
    payload: ValidatedJson<VideoPayload>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Video>, AppError> {
    debug!(user = %identity.username, video_id = %id.0, "update video requested");
    let video =
        video_service::update_video(&app_state.db, id.0, payload.into_inner().into()).await?;
    Ok(web::Json(video))
}

async fn delete(
    identity: AuthIdentity,
    id: VideoId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    debug!(user = %identity.username, video_id = %id.0, "delete video requested");
    video_service::delete_video(&app_state.db, id.0).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Video deleted successfully".to_string(),
    }))
}

/// Registered relative to the protected scope (`/api`).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/videos")
            .route(web::post().to(save))
            .route(web::get().to(get_all)),
    );
    cfg.service(
        web::resource("/videos/{id}")
            .route(web::get().to(get_by_id))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}
