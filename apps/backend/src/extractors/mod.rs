pub mod auth_identity;
pub mod validated_json;
pub mod video_id;
