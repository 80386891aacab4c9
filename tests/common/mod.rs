#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const SCHEMA: &str = r#"
CREATE TABLE events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    location TEXT,
    image_url TEXT,
    start_date TEXT NOT NULL,
    end_date TEXT,
    creator_id TEXT
);

CREATE TABLE event_attendees (
    event_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    PRIMARY KEY (event_id, user_id)
);

CREATE TABLE users (
    id TEXT PRIMARY KEY,
    username TEXT,
    full_name TEXT,
    avatar_url TEXT,
    bio TEXT
);

CREATE TABLE friend_requests (
    id TEXT PRIMARY KEY,
    requester_id TEXT NOT NULL,
    receiver_id TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending'
);
"#;

/// Fresh in-memory store per test. One connection only: every pooled
/// connection to `sqlite::memory:` would otherwise see its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    for statement in SCHEMA.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("create schema");
    }

    pool
}

pub async fn insert_event(pool: &SqlitePool, id: &str, title: &str, start_date: &str) {
    sqlx::query(
        "INSERT INTO events (id, title, description, location, image_url, start_date) \
         VALUES (?1, ?2, 'desc', 'Amsterdam', NULL, ?3)",
    )
    .bind(id)
    .bind(title)
    .bind(start_date)
    .execute(pool)
    .await
    .expect("insert event");
}

pub async fn insert_user(pool: &SqlitePool, id: &str, username: &str, full_name: Option<&str>) {
    sqlx::query("INSERT INTO users (id, username, full_name, bio) VALUES (?1, ?2, ?3, 'hi')")
        .bind(id)
        .bind(username)
        .bind(full_name)
        .execute(pool)
        .await
        .expect("insert user");
}

pub async fn insert_friend_request(
    pool: &SqlitePool,
    id: &str,
    requester_id: &str,
    receiver_id: &str,
    status: &str,
) {
    sqlx::query(
        "INSERT INTO friend_requests (id, requester_id, receiver_id, status) \
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(id)
    .bind(requester_id)
    .bind(receiver_id)
    .bind(status)
    .execute(pool)
    .await
    .expect("insert friend request");
}
