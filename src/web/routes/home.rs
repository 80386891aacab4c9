use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::services::events_service::EventCardView;
use crate::services::home_service::{self, FriendRequestView};
use crate::web::middleware::auth::MaybeUser;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub upcoming_events: Vec<EventCardView>,
    pub friend_requests: Vec<FriendRequestView>,
    pub signed_in: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct HomeQuery {
    pub notice: Option<String>,
    pub request_id: Option<String>,
}

pub async fn home_handler(
    Extension(MaybeUser(user)): Extension<MaybeUser>,
    Query(query): Query<HomeQuery>,
    State(pool): State<SqlitePool>,
) -> Html<String> {
    // A failed accept/decline redirects back here; the matching list item
    // re-renders with its inline error.
    let error_request_id = match query.notice.as_deref() {
        Some("friend_request_error") => query.request_id.as_deref(),
        _ => None,
    };

    let viewer_id = user.as_ref().map(|u| u.id.as_str());
    let data = home_service::build_home_page(&pool, viewer_id, error_request_id).await;

    let template = HomeTemplate {
        upcoming_events: data.upcoming_events,
        friend_requests: data.friend_requests,
        signed_in: data.signed_in,
    };
    Html(template.render().unwrap())
}
