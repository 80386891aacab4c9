use sqlx::SqlitePool;

use crate::models::FriendRequestRow;

pub const SQL_LIST_PENDING_FOR_RECEIVER: &str = r#"
SELECT
    fr.id,
    fr.requester_id,
    u.full_name AS requester_full_name,
    u.avatar_url AS requester_avatar_url
FROM friend_requests fr
LEFT JOIN users u ON u.id = fr.requester_id
WHERE fr.receiver_id = ?1
  AND fr.status = 'pending'
ORDER BY fr.id ASC
"#;

// Status transitions mirror the backend's accept/decline procedures. The
// status guard makes a second invocation for the same request affect zero
// rows, so handling a request is observable exactly once.
pub const SQL_ACCEPT_FRIEND_REQUEST: &str = r#"
UPDATE friend_requests
SET status = 'accepted'
WHERE id = ?1
  AND receiver_id = ?2
  AND status = 'pending'
"#;

pub const SQL_DECLINE_FRIEND_REQUEST: &str = r#"
UPDATE friend_requests
SET status = 'declined'
WHERE id = ?1
  AND receiver_id = ?2
  AND status = 'pending'
"#;

pub async fn list_pending_for_receiver(
    pool: &SqlitePool,
    receiver_id: &str,
) -> sqlx::Result<Vec<FriendRequestRow>> {
    sqlx::query_as::<_, FriendRequestRow>(SQL_LIST_PENDING_FOR_RECEIVER)
        .bind(receiver_id)
        .fetch_all(pool)
        .await
}

pub async fn accept_friend_request(
    pool: &SqlitePool,
    request_id: &str,
    receiver_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_ACCEPT_FRIEND_REQUEST)
        .bind(request_id)
        .bind(receiver_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn decline_friend_request(
    pool: &SqlitePool,
    request_id: &str,
    receiver_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DECLINE_FRIEND_REQUEST)
        .bind(request_id)
        .bind(receiver_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
