use anyhow::Context;
use reqwest::header;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::AppError;
use crate::utils;

const TOKEN_URL: &str = "https://www.strava.com/oauth/token";
const ACTIVITIES_URL: &str = "https://www.strava.com/api/v3/athlete/activities";

/// One normalized activity as the rest of the app sees it: distance in km,
/// speed in km/h, the summary polyline pulled up to the top level.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub distance: f64,
    pub average_speed: f64,
    pub start_date_local: String,
    pub polyline: String,
}

/// Raw activity entry from the strava listing endpoint. Distance is meters,
/// average speed is m/s.
#[derive(Deserialize, Debug, Clone)]
pub struct ActivityResponse {
    pub id: i64,
    pub name: String,
    pub distance: f64,
    pub average_speed: f64,
    pub start_date_local: String,
    pub map: ActivityMap,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ActivityMap {
    pub summary_polyline: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
struct TokenResponse {
    access_token: String,
}

impl From<ActivityResponse> for Activity {
    fn from(raw: ActivityResponse) -> Self {
        Activity {
            id: raw.id,
            name: raw.name,
            distance: utils::meters_to_km(raw.distance),
            average_speed: utils::mps_to_kmh(raw.average_speed),
            start_date_local: raw.start_date_local,
            polyline: raw.map.summary_polyline.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Default)]
pub struct StravaApiService {
    client: reqwest::Client,
}

impl StravaApiService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Exchanges an oauth authorization code for a bearer token. Single shot,
    /// no retry, a non-success upstream status comes back as a typed error.
    pub async fn exchange_token(&self, code: &str) -> Result<String, AppError> {
        let client_id = std::env::var("STRAVA_CLIENT_ID")
            .context("STRAVA_CLIENT_ID environment variable not found")?;
        let client_secret = std::env::var("STRAVA_CLIENT_SECRET")
            .context("STRAVA_CLIENT_SECRET environment variable not found")?;

        debug!("Exchanging authorization code for a strava token");

        let resp = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .context("Failed to get token from strava")?;

        if !resp.status().is_success() {
            let status = resp.status();
            error!(
                "Received a non-success status code {}: {}",
                status,
                resp.text().await.unwrap_or("Unknown error".to_string())
            );
            return Err(AppError::TokenExchange(status));
        }

        let text = resp.text().await.context("Failed to read token response")?;
        let token: TokenResponse =
            serde_json::from_str(&text).context("Failed to deserialize JSON")?;

        Ok(token.access_token)
    }

    /// Fetches the athlete's recent activities, normalized and sorted
    /// newest-first. Only the provider's default page is requested, long
    /// histories get truncated.
    pub async fn fetch_activities(&self, access_token: &str) -> Result<Vec<Activity>, AppError> {
        debug!("Fetching recent strava activities");

        let resp = self
            .client
            .get(ACTIVITIES_URL)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", access_token),
            )
            .send()
            .await
            .map_err(|e| AppError::ActivityFetch(format!("Failed to get strava data: {}", e)))?;

        if !resp.status().is_success() {
            return Err(AppError::ActivityFetch(format!(
                "Received a non-success status code {}: {}",
                resp.status(),
                resp.text().await.unwrap_or("Unknown error".to_string())
            )));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| AppError::ActivityFetch(format!("Failed to get strava data: {}", e)))?;
        let raw: Vec<ActivityResponse> = serde_json::from_str(&text)
            .map_err(|e| AppError::ActivityFetch(format!("Failed to deserialize JSON: {}", e)))?;

        Ok(normalize_activities(raw))
    }
}

/// Converts raw entries to the internal shape and pins "latest = first". The
/// fixed `YYYY-MM-DDTHH:MM:SSZ` format sorts lexicographically in
/// chronological order, so a plain string sort is enough; the stable sort
/// keeps upstream order for identical timestamps.
pub fn normalize_activities(raw: Vec<ActivityResponse>) -> Vec<Activity> {
    let mut activities: Vec<Activity> = raw.into_iter().map(Activity::from).collect();
    activities.sort_by(|a, b| b.start_date_local.cmp(&a.start_date_local));
    activities
}
