use axum::{
    middleware,
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::net::SocketAddr;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use function_website::web::middleware::auth as auth_middleware;
use function_website::web::routes::{auth, event, events, friends, home, profile};

#[tokio::main]
async fn main() {
    // Load .env before anything reads configuration
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Connect to the remote data store
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");

    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("Cannot connect to the data store");

    // 3. Session-aware pages: browsable without a session, the current
    // user (if any) rides along in request extensions
    let session_aware_routes = Router::new()
        .route("/home", get(home::home_handler))
        .route("/events", get(events::events_handler))
        .route("/events/:event_id", get(event::event_detail_handler))
        .layer(middleware::from_fn(auth_middleware::identify_user));

    // 4. Protected pages and all mutations
    let protected_routes = Router::new()
        .route("/profile", get(profile::profile_handler))
        .route(
            "/events/:event_id/attendance",
            post(event::attendance_command_handler),
        )
        .route(
            "/friend-requests/:request_id",
            post(friends::friend_request_command_handler),
        )
        .route("/logout", post(auth::logout_handler))
        .layer(middleware::from_fn(auth_middleware::require_auth));

    // 5. Assemble the application
    let app = Router::new()
        // Public routes
        .route("/", get(|| async { Redirect::to("/home") }))
        .route("/login", get(auth::login_page).post(auth::login_handler))
        .merge(session_aware_routes)
        .merge(protected_routes)
        // Static files
        .nest_service(
            "/assets",
            get_service(ServeDir::new("assets")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        // State
        .with_state(pool);

    // 6. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = port.saturating_add(1);
            eprintln!(
                "Could not bind on {}: {}. Trying fallback {}:{}",
                addr, e, host, fallback_port
            );
            let fallback: SocketAddr = format!("{}:{}", host, fallback_port)
                .parse()
                .expect("Cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind on fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("Server running on http://{}", bound_addr);
    println!("Go to http://{}/login to get started", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
