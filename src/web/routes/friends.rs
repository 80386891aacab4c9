use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Extension, Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::friend_request_service;
use crate::web::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize)]
pub struct FriendRequestCommandForm {
    pub action: String, // accept|decline
    pub return_to: Option<String>,
}

pub async fn friend_request_command_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(request_id): Path<String>,
    State(pool): State<SqlitePool>,
    Form(form): Form<FriendRequestCommandForm>,
) -> impl IntoResponse {
    let action = form.action.as_str();
    if action != "accept" && action != "decline" {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let target = form
        .return_to
        .as_deref()
        .and_then(sanitize_return_to)
        .unwrap_or("/home");

    match friend_request_service::handle_friend_request(&pool, &auth_user.id, &request_id, action)
        .await
    {
        // The redirected GET re-queries pending requests, so a handled
        // request drops out of the list exactly once.
        Ok(_) => Redirect::to(target).into_response(),
        Err(e) => {
            warn!("Friend request {} failed for {}: {}", action, request_id, e);
            let sep = if target.contains('?') { "&" } else { "?" };
            Redirect::to(&format!(
                "{}{}notice=friend_request_error&request_id={}",
                target, sep, request_id
            ))
            .into_response()
        }
    }
}

fn sanitize_return_to(value: &str) -> Option<&str> {
    let v = value.trim();
    if !v.starts_with('/') {
        return None;
    }
    if v.starts_with("//") || v.contains("://") {
        return None;
    }
    Some(v)
}

#[cfg(test)]
mod tests {
    use super::sanitize_return_to;

    #[test]
    fn return_to_must_be_a_local_path() {
        assert_eq!(sanitize_return_to("/home"), Some("/home"));
        assert_eq!(sanitize_return_to(" /home?tab=x "), Some("/home?tab=x"));
        assert_eq!(sanitize_return_to("https://evil.example"), None);
        assert_eq!(sanitize_return_to("//evil.example"), None);
        assert_eq!(sanitize_return_to("home"), None);
    }
}
