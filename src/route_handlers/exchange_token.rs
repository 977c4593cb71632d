use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::AppState;

use super::SESSION_COOKIE;

#[derive(Deserialize)]
#[serde(untagged)]
pub enum CallbackParams {
    Success {
        code: String,
        scope: Option<String>,
        state: Option<String>,
    },
    Error {
        error: String,
        state: Option<String>,
    },
}

pub async fn handler(
    parameters: Option<Query<CallbackParams>>,
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    let parameters = parameters.ok_or(AppError::MissingCode)?;

    match parameters.0 {
        CallbackParams::Error { error, state: _ } => Err(AppError::AuthDenied(error)),

        CallbackParams::Success {
            code,
            scope: _,
            state: _,
        } => {
            let access_token = state.strava.exchange_token(&code).await?;

            debug!("Strava token stored in the session cookie");

            let cookie = Cookie::build(SESSION_COOKIE, access_token)
                .path("/")
                .http_only(true)
                .finish();

            Ok((jar.add(cookie), Redirect::to("/authorization_successful")).into_response())
        }
    }
}
