use askama::Template;
use axum::{
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use cookie::Cookie;
use serde::Deserialize;
use serde_json::json;
use std::env;
use tracing::{error, warn};

fn auth_base_url() -> String {
    env::var("AUTH_URL").unwrap_or_else(|_| "http://localhost:9999".to_string())
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    access_token: String,
    refresh_token: String,
}

pub async fn login_page() -> Html<String> {
    let template = LoginTemplate { error: None };
    Html(template.render().unwrap())
}

pub async fn login_handler(Form(form): Form<LoginForm>) -> Result<Response, Html<String>> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/token?grant_type=password", auth_base_url()))
        .json(&json!({
            "email": form.email,
            "password": form.password,
        }))
        .send()
        .await;

    match response {
        Ok(resp) if resp.status().is_success() => {
            let auth_resp: AuthResponse = match resp.json().await {
                Ok(body) => body,
                Err(e) => {
                    error!("Auth response parse failed: {}", e);
                    return Err(login_error("Sign-in failed. Please try again."));
                }
            };

            let mut response = Redirect::to("/home").into_response();
            response.headers_mut().append(
                header::SET_COOKIE,
                session_cookie("access_token", &auth_resp.access_token)
                    .to_string()
                    .parse()
                    .unwrap(),
            );
            response.headers_mut().append(
                header::SET_COOKIE,
                session_cookie("refresh_token", &auth_resp.refresh_token)
                    .to_string()
                    .parse()
                    .unwrap(),
            );
            Ok(response)
        }
        Ok(resp) => {
            warn!("Auth service rejected login: {}", resp.status());
            Err(login_error("Invalid email or password."))
        }
        Err(e) => {
            error!("Auth service unreachable: {}", e);
            Err(login_error("Sign-in failed. Please try again later."))
        }
    }
}

pub async fn logout_handler(headers: HeaderMap) -> Response {
    // Best effort: tell the backend to revoke the session before dropping
    // the cookies. A failure here still signs the browser out.
    if let Some(token) = access_token_from_headers(&headers) {
        let client = reqwest::Client::new();
        let result = client
            .post(format!("{}/logout", auth_base_url()))
            .bearer_auth(token)
            .send()
            .await;
        if let Err(e) = result {
            warn!("Remote sign-out failed: {}", e);
        }
    }

    let mut response = Redirect::to("/login").into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        expired_cookie("access_token").to_string().parse().unwrap(),
    );
    response.headers_mut().append(
        header::SET_COOKIE,
        expired_cookie("refresh_token").to_string().parse().unwrap(),
    );
    response
}

fn login_error(message: &str) -> Html<String> {
    let template = LoginTemplate {
        error: Some(message.to_string()),
    };
    Html(template.render().unwrap())
}

fn session_cookie<'a>(name: &'a str, value: &'a str) -> Cookie<'a> {
    let mut cookie = Cookie::new(name, value.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(cookie::SameSite::Lax);
    cookie
}

fn expired_cookie(name: &str) -> Cookie<'_> {
    let mut cookie = Cookie::new(name, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(cookie::SameSite::Lax);
    cookie.set_max_age(cookie::time::Duration::ZERO);
    cookie
}

fn access_token_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split("; ")
                .find(|c| c.starts_with("access_token="))
                .and_then(|c| c.strip_prefix("access_token="))
        })
}
