//! SeaORM adapter for the video record store.
//!
//! Adapter functions return `DbErr`; the repos layer maps to `AppError`.
//! Every read filters `deleted_at IS NULL` explicitly, so soft-deleted rows
//! stay invisible without relying on the mapper.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{people, videos};

pub mod dto;

pub use dto::{PersonWrite, VideoWrite};

/// Insert the author row, then the video row referencing it. IDs are
/// generated here, never taken from the caller.
pub async fn insert_video<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    write: VideoWrite,
) -> Result<(videos::Model, people::Model), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let person_active = people::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(write.author.name),
        age: Set(write.author.age),
        email: Set(write.author.email),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };
    let person = person_active.insert(conn).await?;

    let video_active = videos::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(write.title),
        description: Set(write.description),
        url: Set(write.url),
        author_id: Set(person.id),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };
    let video = video_active.insert(conn).await?;

    Ok((video, person))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<(videos::Model, people::Model)>, sea_orm::DbErr> {
    let found = videos::Entity::find_by_id(id)
        .filter(videos::Column::DeletedAt.is_null())
        .find_also_related(people::Entity)
        .one(conn)
        .await?;

    // A video without its author row would be a corrupt pair; treat it as
    // absent rather than exposing half a record.
    Ok(found.and_then(|(video, person)| person.map(|person| (video, person))))
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(videos::Model, people::Model)>, sea_orm::DbErr> {
    let rows = videos::Entity::find()
        .filter(videos::Column::DeletedAt.is_null())
        .order_by_asc(videos::Column::CreatedAt)
        .find_also_related(people::Entity)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(video, person)| person.map(|person| (video, person)))
        .collect())
}

/// Full replace of the video fields and its author's fields. The author row
/// keeps its identity; only its contents change.
pub async fn update_video<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    write: VideoWrite,
) -> Result<Option<(videos::Model, people::Model)>, sea_orm::DbErr> {
    let Some((video, person)) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let now = time::OffsetDateTime::now_utc();

    let mut person_active: people::ActiveModel = person.into();
    person_active.name = Set(write.author.name);
    person_active.age = Set(write.author.age);
    person_active.email = Set(write.author.email);
    person_active.updated_at = Set(now);
    let person = person_active.update(conn).await?;

    let mut video_active: videos::ActiveModel = video.into();
    video_active.title = Set(write.title);
    video_active.description = Set(write.description);
    video_active.url = Set(write.url);
    video_active.updated_at = Set(now);
    let video = video_active.update(conn).await?;

    Ok(Some((video, person)))
}

/// Soft delete: stamps `deleted_at` on the video and its author row.
/// Returns false when no live video carries the id.
pub async fn soft_delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<bool, sea_orm::DbErr> {
    let Some((video, person)) = find_by_id(conn, id).await? else {
        return Ok(false);
    };

    let now = time::OffsetDateTime::now_utc();

    let mut video_active: videos::ActiveModel = video.into();
    video_active.deleted_at = Set(Some(now));
    video_active.updated_at = Set(now);
    video_active.update(conn).await?;

    let mut person_active: people::ActiveModel = person.into();
    person_active.deleted_at = Set(Some(now));
    person_active.updated_at = Set(now);
    person_active.update(conn).await?;

    Ok(true)
}
