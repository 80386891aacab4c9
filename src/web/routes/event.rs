use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Extension, Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::event_detail_service::{self, EventDetailQuery, EventDetailView};
use crate::web::middleware::auth::{AuthenticatedUser, MaybeUser};

#[derive(Template)]
#[template(path = "event.html")]
pub struct EventDetailTemplate {
    pub event: EventDetailView,
}

pub async fn event_detail_handler(
    Extension(MaybeUser(user)): Extension<MaybeUser>,
    Path(event_id): Path<String>,
    Query(query): Query<EventDetailQuery>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    let viewer_id = user.as_ref().map(|u| u.id.as_str());
    let view = match event_detail_service::load_event_detail_view(
        &pool,
        viewer_id,
        &event_id,
        query.notice.clone(),
    )
    .await
    {
        Ok(v) => v,
        Err(e) => {
            warn!("Event detail load failed for {}: {}", event_id, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let Some(view) = view else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let template = EventDetailTemplate { event: view };
    Html(template.render().unwrap()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct AttendanceCommandForm {
    pub action: String, // attend|cancel
}

pub async fn attendance_command_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    State(pool): State<SqlitePool>,
    Form(form): Form<AttendanceCommandForm>,
) -> impl IntoResponse {
    let action = form.action.as_str();
    if action != "attend" && action != "cancel" {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let notice =
        match event_detail_service::set_attendance(&pool, &auth_user.id, &event_id, action).await {
            Ok(_) => match action {
                "attend" => "attend_ok",
                _ => "cancel_ok",
            },
            Err(e) => {
                warn!("Attendance command failed for {}: {}", event_id, e);
                "error"
            }
        };

    Redirect::to(&format!("/events/{}?notice={}", event_id, notice)).into_response()
}
