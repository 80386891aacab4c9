use sqlx::SqlitePool;

use crate::database::users_repo;
use crate::services::events_service;

pub struct ProfileView {
    pub full_name: String,
    pub username: String,
    pub avatar_url: String,
    pub bio: String,
}

pub async fn load_profile_view(
    pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Option<ProfileView>> {
    let Some(row) = users_repo::load_user_profile(pool, user_id).await? else {
        return Ok(None);
    };

    let username = row.username.unwrap_or_default();
    let full_name = row
        .full_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| username.clone());

    Ok(Some(ProfileView {
        full_name,
        username,
        avatar_url: events_service::image_or_placeholder(row.avatar_url),
        bio: row.bio.unwrap_or_default(),
    }))
}
