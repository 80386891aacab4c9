use sqlx::SqlitePool;

use crate::models::EventRow;

pub const SQL_LIST_EVENTS: &str = r#"
SELECT
    id,
    title,
    description,
    location,
    image_url,
    start_date,
    end_date,
    creator_id
FROM events
ORDER BY datetime(start_date) ASC
LIMIT ?1
"#;

pub const SQL_LOAD_EVENT: &str = r#"
SELECT
    id,
    title,
    description,
    location,
    image_url,
    start_date,
    end_date,
    creator_id
FROM events
WHERE id = ?1
LIMIT 1
"#;

/// Lists events ascending by start date. `limit` < 0 means no limit
/// (sqlite treats a negative LIMIT as unbounded).
pub async fn list_events(pool: &SqlitePool, limit: i64) -> sqlx::Result<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LIST_EVENTS)
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn load_event(pool: &SqlitePool, event_id: &str) -> sqlx::Result<Option<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LOAD_EVENT)
        .bind(event_id)
        .fetch_optional(pool)
        .await
}
