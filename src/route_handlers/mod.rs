pub mod authorization_successful;
pub mod exchange_token;
pub mod home;
pub mod html_template;
pub mod index;
pub mod strava_auth;

/// Name of the signed cookie that carries the strava bearer token for the
/// duration of the browser session.
pub const SESSION_COOKIE: &str = "saddlestats_session";
