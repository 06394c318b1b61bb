//! Video repository for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::videos_sea as videos_adapter;
use crate::entities::{people, videos};
use crate::error::AppError;

/// Author domain model. This is also the wire shape: the soft-delete marker
/// is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Video domain model with its author embedded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: Person,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Author fields accepted on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Video fields accepted on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: NewPerson,
}

pub async fn create_video<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewVideo,
) -> Result<Video, AppError> {
    let pair = videos_adapter::insert_video(conn, new.into()).await?;
    Ok(Video::from(pair))
}

pub async fn find_video_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<Video>, AppError> {
    let pair = videos_adapter::find_by_id(conn, id).await?;
    Ok(pair.map(Video::from))
}

pub async fn find_all_videos<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Video>, AppError> {
    let pairs = videos_adapter::find_all(conn).await?;
    Ok(pairs.into_iter().map(Video::from).collect())
}

pub async fn update_video<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    update: NewVideo,
) -> Result<Option<Video>, AppError> {
    let pair = videos_adapter::update_video(conn, id, update.into()).await?;
    Ok(pair.map(Video::from))
}

/// Returns false when no live video carries the id.
pub async fn delete_video<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<bool, AppError> {
    let deleted = videos_adapter::soft_delete(conn, id).await?;
    Ok(deleted)
}

// Conversions between SeaORM models and domain models

impl From<people::Model> for Person {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<(videos::Model, people::Model)> for Video {
    fn from((video, person): (videos::Model, people::Model)) -> Self {
        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            url: video.url,
            author: Person::from(person),
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

impl From<NewPerson> for videos_adapter::PersonWrite {
    fn from(new: NewPerson) -> Self {
        Self {
            name: new.name,
            age: new.age,
            email: new.email,
        }
    }
}

impl From<NewVideo> for videos_adapter::VideoWrite {
    fn from(new: NewVideo) -> Self {
        Self {
            title: new.title,
            description: new.description,
            url: new.url,
            author: new.author.into(),
        }
    }
}
