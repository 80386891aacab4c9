use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Extension,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::profile_service::{self, ProfileView};
use crate::web::middleware::auth::AuthenticatedUser;

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub profile: ProfileView,
}

pub async fn profile_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    let view = match profile_service::load_profile_view(&pool, &auth_user.id).await {
        Ok(v) => v,
        Err(e) => {
            warn!("Profile load failed for {}: {}", auth_user.id, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let Some(view) = view else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let template = ProfileTemplate { profile: view };
    Html(template.render().unwrap()).into_response()
}
