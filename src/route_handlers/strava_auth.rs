use anyhow::Context;
use axum::response::{IntoResponse, Redirect};
use tracing::debug;

use crate::env_utils;
use crate::error::AppError;

pub async fn handler() -> Result<impl IntoResponse, AppError> {
    let client_id = std::env::var("STRAVA_CLIENT_ID")
        .context("STRAVA_CLIENT_ID environment variable not found")?;

    let host_uri = env_utils::get_host_uri(None);
    let host_uri = host_uri.as_bytes();
    let host_uri = url::form_urlencoded::byte_serialize(host_uri);
    let host_uri: String = host_uri.collect();

    let mut auth_url = String::with_capacity(200);
    auth_url.push_str("https://www.strava.com/oauth/authorize");
    auth_url.push_str(&format!("?client_id={}", client_id));
    auth_url.push_str("&response_type=code");
    auth_url.push_str(&format!("&redirect_uri={}/exchange_token", host_uri));
    auth_url.push_str("&approval_prompt=force");
    auth_url.push_str("&scope=read,activity:read");

    debug!("Redirecting user to strava auth url, {}", auth_url);

    Ok(Redirect::temporary(&auth_url))
}
