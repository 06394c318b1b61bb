//! Video service: orchestrates the repository layer and owns transaction
//! boundaries for writes that touch both the video and author rows.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::videos::{self as videos_repo, NewVideo, Video};

/// Persist a new video together with its author. Both rows are written in
/// one transaction so a failed video insert never leaves an orphan author.
pub async fn save_video(db: &DatabaseConnection, new: NewVideo) -> Result<Video, AppError> {
    let author_email = new.author.email.clone();

    let txn = db.begin().await?;
    let video = videos_repo::create_video(&txn, new).await?;
    txn.commit().await?;

    info!(
        video_id = %video.id,
        author = %Redacted(&author_email),
        "video created"
    );

    Ok(video)
}

pub async fn list_videos(db: &DatabaseConnection) -> Result<Vec<Video>, AppError> {
    let videos = videos_repo::find_all_videos(db).await?;
    debug!(count = videos.len(), "videos listed");
    Ok(videos)
}

pub async fn get_video(db: &DatabaseConnection, id: Uuid) -> Result<Video, AppError> {
    videos_repo::find_video_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Video {id} not found")))
}

/// Full replace of a video and its author fields.
pub async fn update_video(
    db: &DatabaseConnection,
    id: Uuid,
    update: NewVideo,
) -> Result<Video, AppError> {
    let txn = db.begin().await?;
    let updated = videos_repo::update_video(&txn, id, update).await?;
    txn.commit().await?;

    let video = updated.ok_or_else(|| AppError::not_found(format!("Video {id} not found")))?;

    info!(video_id = %video.id, "video updated");
    Ok(video)
}

/// Soft delete; the video and its author stay in the store but disappear
/// from every read.
pub async fn delete_video(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
    let txn = db.begin().await?;
    let deleted = videos_repo::delete_video(&txn, id).await?;
    txn.commit().await?;

    if !deleted {
        return Err(AppError::not_found(format!("Video {id} not found")));
    }

    info!(video_id = %id, "video deleted");
    Ok(())
}
