use askama::Template;
use axum::{extract::State, response::Html};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::events_service::{self, EventCardView};

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub events: Vec<EventCardView>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
    pub retry_href: String,
}

pub async fn events_handler(State(pool): State<SqlitePool>) -> Html<String> {
    match events_service::list_event_cards(&pool).await {
        Ok(events) => {
            let template = EventsTemplate { events };
            Html(template.render().unwrap())
        }
        Err(e) => {
            warn!("Events list fetch failed: {}", e);
            let template = ErrorTemplate {
                message: "Failed to load events. Please try again later.".to_string(),
                retry_href: "/events".to_string(),
            };
            Html(template.render().unwrap())
        }
    }
}
