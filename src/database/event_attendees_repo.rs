use sqlx::SqlitePool;

use crate::models::EventAttendeeRow;

pub const SQL_LOAD_ATTENDANCE: &str = r#"
SELECT event_id, user_id
FROM event_attendees
WHERE event_id = ?1
  AND user_id = ?2
LIMIT 1
"#;

// OR IGNORE keeps the (event_id, user_id) pair unique: re-attending an
// event you already attend is a no-op instead of a constraint error.
pub const SQL_INSERT_ATTENDANCE: &str = r#"
INSERT OR IGNORE INTO event_attendees (event_id, user_id)
VALUES (?1, ?2)
"#;

pub const SQL_DELETE_ATTENDANCE: &str = r#"
DELETE FROM event_attendees
WHERE event_id = ?1
  AND user_id = ?2
"#;

pub async fn is_attending(
    pool: &SqlitePool,
    event_id: &str,
    user_id: &str,
) -> sqlx::Result<bool> {
    let row = sqlx::query_as::<_, EventAttendeeRow>(SQL_LOAD_ATTENDANCE)
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn insert_attendance(
    pool: &SqlitePool,
    event_id: &str,
    user_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ATTENDANCE)
        .bind(event_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_attendance(
    pool: &SqlitePool,
    event_id: &str,
    user_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ATTENDANCE)
        .bind(event_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
