mod common;

use function_website::database::friend_requests_repo;
use function_website::services::friend_request_service;

#[tokio::test]
async fn pending_list_is_empty_without_rows() {
    let pool = common::test_pool().await;

    let pending = friend_requests_repo::list_pending_for_receiver(&pool, "me")
        .await
        .expect("list");
    assert!(pending.is_empty());
}

#[tokio::test]
async fn pending_list_joins_requester_profile() {
    let pool = common::test_pool().await;
    common::insert_user(&pool, "alice", "alice", Some("Alice Jansen")).await;
    common::insert_friend_request(&pool, "r1", "alice", "me", "pending").await;

    let pending = friend_requests_repo::list_pending_for_receiver(&pool, "me")
        .await
        .expect("list");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "r1");
    assert_eq!(pending[0].requester_id, "alice");
    assert_eq!(pending[0].requester_full_name.as_deref(), Some("Alice Jansen"));
}

#[tokio::test]
async fn only_pending_requests_are_listed() {
    let pool = common::test_pool().await;
    common::insert_user(&pool, "alice", "alice", Some("Alice")).await;
    common::insert_friend_request(&pool, "r1", "alice", "me", "accepted").await;
    common::insert_friend_request(&pool, "r2", "alice", "me", "declined").await;
    common::insert_friend_request(&pool, "r3", "alice", "someone-else", "pending").await;

    let pending = friend_requests_repo::list_pending_for_receiver(&pool, "me")
        .await
        .expect("list");
    assert!(pending.is_empty());
}

#[tokio::test]
async fn accept_removes_from_pending_exactly_once() {
    let pool = common::test_pool().await;
    common::insert_user(&pool, "alice", "alice", Some("Alice")).await;
    common::insert_friend_request(&pool, "r1", "alice", "me", "pending").await;

    let handled = friend_request_service::handle_friend_request(&pool, "me", "r1", "accept")
        .await
        .expect("accept");
    assert!(handled);

    let pending = friend_requests_repo::list_pending_for_receiver(&pool, "me")
        .await
        .expect("list");
    assert!(pending.is_empty());

    // A replayed accept transitions nothing.
    let handled_again = friend_request_service::handle_friend_request(&pool, "me", "r1", "accept")
        .await
        .expect("replayed accept");
    assert!(!handled_again);
}

#[tokio::test]
async fn decline_after_accept_does_not_overwrite() {
    let pool = common::test_pool().await;
    common::insert_user(&pool, "alice", "alice", Some("Alice")).await;
    common::insert_friend_request(&pool, "r1", "alice", "me", "pending").await;

    friend_request_service::handle_friend_request(&pool, "me", "r1", "accept")
        .await
        .expect("accept");
    let handled = friend_request_service::handle_friend_request(&pool, "me", "r1", "decline")
        .await
        .expect("decline");
    assert!(!handled);

    let status: String = sqlx::query_scalar("SELECT status FROM friend_requests WHERE id = 'r1'")
        .fetch_one(&pool)
        .await
        .expect("status");
    assert_eq!(status, "accepted");
}

#[tokio::test]
async fn requests_for_other_receivers_cannot_be_handled() {
    let pool = common::test_pool().await;
    common::insert_user(&pool, "alice", "alice", Some("Alice")).await;
    common::insert_friend_request(&pool, "r1", "alice", "someone-else", "pending").await;

    let handled = friend_request_service::handle_friend_request(&pool, "me", "r1", "accept")
        .await
        .expect("accept");
    assert!(!handled);

    let status: String = sqlx::query_scalar("SELECT status FROM friend_requests WHERE id = 'r1'")
        .fetch_one(&pool)
        .await
        .expect("status");
    assert_eq!(status, "pending");
}

#[tokio::test]
async fn unknown_action_is_rejected() {
    let pool = common::test_pool().await;

    let result = friend_request_service::handle_friend_request(&pool, "me", "r1", "block").await;
    assert!(result.is_err());
}
