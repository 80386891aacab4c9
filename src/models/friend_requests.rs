// Pending-request listing joins the requester's profile fields onto the
// request row, so the view layer never has to chase the foreign key itself.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FriendRequestRow {
    pub id: String,
    pub requester_id: String,
    pub requester_full_name: Option<String>,
    pub requester_avatar_url: Option<String>,
}
