#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventAttendeeRow {
    pub event_id: String,
    pub user_id: String,
}
