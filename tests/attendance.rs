mod common;

use function_website::database::event_attendees_repo;
use function_website::services::event_detail_service;

#[tokio::test]
async fn alternating_toggles_leave_attending_iff_odd() {
    let pool = common::test_pool().await;
    common::insert_event(&pool, "e1", "Picnic", "2025-06-01T12:00:00").await;

    for n in 1..=6 {
        let action = if n % 2 == 1 { "attend" } else { "cancel" };
        event_detail_service::set_attendance(&pool, "u1", "e1", action)
            .await
            .expect("toggle");

        let attending = event_attendees_repo::is_attending(&pool, "e1", "u1")
            .await
            .expect("check");
        assert_eq!(attending, n % 2 == 1, "after {} toggles", n);
    }
}

#[tokio::test]
async fn attending_twice_keeps_a_single_row() {
    let pool = common::test_pool().await;
    common::insert_event(&pool, "e1", "Picnic", "2025-06-01T12:00:00").await;

    let first = event_attendees_repo::insert_attendance(&pool, "e1", "u1")
        .await
        .expect("first attend");
    let second = event_attendees_repo::insert_attendance(&pool, "e1", "u1")
        .await
        .expect("second attend");

    assert_eq!(first, 1);
    assert_eq!(second, 0);

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM event_attendees WHERE event_id = 'e1' AND user_id = 'u1'",
    )
    .fetch_one(&pool)
    .await
    .expect("count");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn cancelling_without_attending_is_a_noop() {
    let pool = common::test_pool().await;
    common::insert_event(&pool, "e1", "Picnic", "2025-06-01T12:00:00").await;

    event_detail_service::set_attendance(&pool, "u1", "e1", "cancel")
        .await
        .expect("cancel");

    let attending = event_attendees_repo::is_attending(&pool, "e1", "u1")
        .await
        .expect("check");
    assert!(!attending);
}

#[tokio::test]
async fn unknown_action_is_rejected() {
    let pool = common::test_pool().await;
    common::insert_event(&pool, "e1", "Picnic", "2025-06-01T12:00:00").await;

    let result = event_detail_service::set_attendance(&pool, "u1", "e1", "toggle").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn attendance_is_scoped_per_user() {
    let pool = common::test_pool().await;
    common::insert_event(&pool, "e1", "Picnic", "2025-06-01T12:00:00").await;

    event_detail_service::set_attendance(&pool, "u1", "e1", "attend")
        .await
        .expect("attend");

    let other = event_attendees_repo::is_attending(&pool, "e1", "u2")
        .await
        .expect("check");
    assert!(!other);
}
