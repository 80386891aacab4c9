use sqlx::SqlitePool;

use crate::database::friend_requests_repo;

/// Invokes the accept/decline procedure for a pending request. Returns
/// whether a pending row was actually transitioned; a request that was
/// already handled (double submit, concurrent accept+decline) transitions
/// nothing and reports `false` rather than erroring.
pub async fn handle_friend_request(
    pool: &SqlitePool,
    receiver_id: &str,
    request_id: &str,
    action: &str,
) -> sqlx::Result<bool> {
    let affected = match action {
        "accept" => {
            friend_requests_repo::accept_friend_request(pool, request_id, receiver_id).await?
        }
        "decline" => {
            friend_requests_repo::decline_friend_request(pool, request_id, receiver_id).await?
        }
        _ => return Err(sqlx::Error::Protocol("invalid action".into())),
    };
    Ok(affected > 0)
}
