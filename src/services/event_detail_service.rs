use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::{event_attendees_repo, events_repo};
use crate::models::EventRow;
use crate::services::events_service;

#[derive(Debug, Deserialize, Default)]
pub struct EventDetailQuery {
    pub notice: Option<String>,
}

pub struct EventDetailView {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub location_label: String,
    pub image_url: String,
    pub start_label: String,
    pub end_label: Option<String>,
    pub is_attending: bool,
    pub can_attend: bool,
    pub notice_label: Option<String>,
    pub notice_is_error: bool,
}

pub async fn load_event_detail_view(
    pool: &SqlitePool,
    viewer_id: Option<&str>,
    event_id: &str,
    notice: Option<String>,
) -> sqlx::Result<Option<EventDetailView>> {
    let Some(row) = events_repo::load_event(pool, event_id).await? else {
        return Ok(None);
    };

    // Attendance is a separate fetch; failing it degrades the toggle to
    // "not attending" instead of taking the whole page down.
    let is_attending = match viewer_id {
        Some(viewer_id) => event_attendees_repo::is_attending(pool, event_id, viewer_id)
            .await
            .unwrap_or_else(|e| {
                warn!("Attendance check failed for {}: {}", event_id, e);
                false
            }),
        None => false,
    };

    Ok(Some(build_view(row, is_attending, viewer_id.is_some(), notice)))
}

/// Applies an explicit attendance transition. The caller names the intended
/// action, so replaying a form submit (or two racing clicks) settles on the
/// named state instead of flipping twice.
pub async fn set_attendance(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
    action: &str,
) -> sqlx::Result<()> {
    match action {
        "attend" => {
            event_attendees_repo::insert_attendance(pool, event_id, user_id).await?;
        }
        "cancel" => {
            event_attendees_repo::delete_attendance(pool, event_id, user_id).await?;
        }
        _ => return Err(sqlx::Error::Protocol("invalid action".into())),
    }
    Ok(())
}

fn build_view(
    row: EventRow,
    is_attending: bool,
    can_attend: bool,
    notice: Option<String>,
) -> EventDetailView {
    let (start_date, start_time) = events_service::format_start_labels(&row.start_date);
    let start_label = join_date_time(&start_date, &start_time);

    let end_label = row.end_date.as_deref().map(|end| {
        let (date, time) = events_service::format_start_labels(end);
        join_date_time(&date, &time)
    });

    let (notice_label, notice_is_error) = notice_banner(notice.as_deref());

    EventDetailView {
        event_id: row.id,
        title: row.title,
        description: row.description.unwrap_or_default(),
        location_label: row.location.unwrap_or_default(),
        image_url: events_service::image_or_placeholder(row.image_url),
        start_label,
        end_label,
        is_attending,
        can_attend,
        notice_label,
        notice_is_error,
    }
}

fn notice_banner(notice: Option<&str>) -> (Option<String>, bool) {
    match notice {
        None => (None, false),
        Some("attend_ok") => (Some("You are attending this event.".to_string()), false),
        Some("cancel_ok") => (
            Some("Your attendance has been cancelled.".to_string()),
            false,
        ),
        Some(_) => (
            Some("Something went wrong. Please try again.".to_string()),
            true,
        ),
    }
}

fn join_date_time(date: &str, time: &str) -> String {
    if time.is_empty() {
        date.to_string()
    } else {
        format!("{}, {}", date, time)
    }
}
