use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: String,
}

/// Session-aware pages get this instead of a hard auth wall: `None` means
/// "browse as guest", never an error.
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

#[derive(Deserialize)]
struct JwtPayload {
    sub: String,
}

/// Attaches the current user, if any, without rejecting the request.
pub async fn identify_user(mut request: Request, next: Next) -> Response {
    let user = user_from_request(&request);
    request.extensions_mut().insert(MaybeUser(user));
    next.run(request).await
}

/// Hard wall for the profile page and all mutations: no session means a
/// redirect to the login page rather than a bare 401.
pub async fn require_auth(mut request: Request, next: Next) -> Response {
    match user_from_request(&request) {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

fn user_from_request(request: &Request) -> Option<AuthenticatedUser> {
    // Extract the access token cookie from the request
    let token = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split("; ")
                .find(|c| c.starts_with("access_token="))
                .and_then(|c| c.strip_prefix("access_token="))
        })?;

    // Parse JWT payload (middle part); signature verification is the
    // backend's job, we only need the subject claim for scoping queries.
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload_bytes = general_purpose::URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload = serde_json::from_slice::<JwtPayload>(&payload_bytes).ok()?;

    Some(AuthenticatedUser { id: payload.sub })
}
