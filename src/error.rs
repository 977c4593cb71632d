use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

/// Application error type that converts to HTTP responses.
///
/// User-facing bodies stay generic plain text, the interesting detail goes to
/// the log instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no authorization code found in the query string")]
    MissingCode,

    #[error("strava denied the authorization request: {0}")]
    AuthDenied(String),

    #[error("token exchange failed with upstream status {0}")]
    TokenExchange(StatusCode),

    #[error("activity fetch failed: {0}")]
    ActivityFetch(String),

    #[error("no access token in the session")]
    MissingSession,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingCode => (
                StatusCode::BAD_REQUEST,
                "No authorization code found in the query string",
            )
                .into_response(),

            AppError::AuthDenied(reason) => {
                tracing::debug!("Strava authorization denied: {}", reason);
                (StatusCode::UNAUTHORIZED, "Strava authorization was denied").into_response()
            }

            AppError::TokenExchange(status) => {
                tracing::error!(upstream_status = %status, "Strava token exchange failed");
                (
                    StatusCode::BAD_REQUEST,
                    "Failed to exchange authorization code for access token",
                )
                    .into_response()
            }

            AppError::ActivityFetch(detail) => {
                tracing::error!(error = %detail, "Strava activity fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch activities from Strava",
                )
                    .into_response()
            }

            // no token yet, send the browser through the oauth flow
            AppError::MissingSession => Redirect::temporary("/authorize").into_response(),

            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
