use sqlx::SqlitePool;

use crate::models::UserProfileRow;

pub const SQL_LOAD_USER_PROFILE: &str = r#"
SELECT
    id,
    username,
    full_name,
    avatar_url,
    bio
FROM users
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_user_profile(
    pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Option<UserProfileRow>> {
    sqlx::query_as::<_, UserProfileRow>(SQL_LOAD_USER_PROFILE)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
