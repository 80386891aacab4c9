use sqlx::SqlitePool;
use tracing::warn;

use crate::database::friend_requests_repo;
use crate::models::FriendRequestRow;
use crate::services::events_service::{self, EventCardView};

const HOME_EVENTS_LIMIT: i64 = 4;

pub struct FriendRequestView {
    pub request_id: String,
    pub requester_name: String,
    pub requester_avatar_url: String,
    pub has_error: bool,
}

pub struct HomePageData {
    pub upcoming_events: Vec<EventCardView>,
    pub friend_requests: Vec<FriendRequestView>,
    pub signed_in: bool,
}

/// The two home sections are independent: a failure in one is logged and
/// renders that section empty without touching the other. Without a session
/// the requests section is simply empty, not an error.
pub async fn build_home_page(
    pool: &SqlitePool,
    viewer_id: Option<&str>,
    error_request_id: Option<&str>,
) -> HomePageData {
    let upcoming_events = match events_service::list_upcoming_event_cards(pool, HOME_EVENTS_LIMIT)
        .await
    {
        Ok(events) => events,
        Err(e) => {
            warn!("Home events fetch failed: {}", e);
            vec![]
        }
    };

    let friend_requests = match viewer_id {
        Some(viewer_id) => {
            match friend_requests_repo::list_pending_for_receiver(pool, viewer_id).await {
                Ok(rows) => rows
                    .into_iter()
                    .map(|row| request_view(row, error_request_id))
                    .collect(),
                Err(e) => {
                    warn!("Friend requests fetch failed: {}", e);
                    vec![]
                }
            }
        }
        None => vec![],
    };

    HomePageData {
        upcoming_events,
        friend_requests,
        signed_in: viewer_id.is_some(),
    }
}

fn request_view(row: FriendRequestRow, error_request_id: Option<&str>) -> FriendRequestView {
    let has_error = error_request_id == Some(row.id.as_str());
    FriendRequestView {
        requester_name: row
            .requester_full_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        requester_avatar_url: events_service::image_or_placeholder(row.requester_avatar_url),
        request_id: row.id,
        has_error,
    }
}
