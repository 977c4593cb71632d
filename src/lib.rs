use axum::{
    extract::FromRef,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::Key;
use tower_http::{compression::CompressionLayer, services::ServeDir};
use tracing::debug;

use crate::strava_api_service::StravaApiService;

pub mod activity_stats;
pub mod env_utils;
pub mod error;
pub mod route_handlers;
pub mod strava_api_service;
pub mod utils;

/// Shared state handed to every handler. The strava access token itself is
/// NOT in here, it travels in the signed session cookie and gets passed to
/// the api service explicitly per request.
#[derive(Clone)]
pub struct AppState {
    pub strava: StravaApiService,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(session_secret: &str) -> Self {
        // the hex digest is 64 bytes of ascii, which is exactly the minimum
        // key material the cookie jar accepts
        Self {
            strava: StravaApiService::new(),
            cookie_key: Key::from(utils::hash_string(session_secret).as_bytes()),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/**
 * main router for the app, defines the oauth flow routes and the dashboard
 * also brings together the static asset routes
 **/
pub fn get_main_router() -> Router<AppState> {
    debug!("initializing router(s) ...");

    Router::new()
        .route("/", get(route_handlers::index::handler))
        .route("/authorize", get(route_handlers::strava_auth::handler))
        .route(
            "/exchange_token",
            get(route_handlers::exchange_token::handler),
        )
        .route(
            "/authorization_successful",
            get(route_handlers::authorization_successful::handler),
        )
        .route("/home", get(route_handlers::home::handler))
        .route("/healthcheck", get(|| async { "Ok" }))
        .merge(get_services_router())
        .layer(CompressionLayer::new())
}

/**
 * router for the static assets and such
**/
fn get_services_router() -> Router<AppState> {
    let assets_path = match std::env::current_dir() {
        Ok(path) => path,
        Err(_) => std::path::PathBuf::from("./"),
    };

    let assets_path = format!("{}/assets", assets_path.display());

    Router::new().nest_service("/assets", ServeDir::new(assets_path))
}
