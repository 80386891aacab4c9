#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserProfileRow {
    pub id: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}
