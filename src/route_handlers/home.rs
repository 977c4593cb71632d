use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::warn;

use crate::activity_stats::{self, MonthTotal};
use crate::error::AppError;
use crate::AppState;

use super::SESSION_COOKIE;

pub async fn handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let token = jar.get(SESSION_COOKIE).ok_or(AppError::MissingSession)?;

    let activities = state.strava.fetch_activities(token.value()).await?;

    // fetch_activities sorts newest-first, so the first element is the
    // latest ride
    let latest = match activities.first() {
        Some(latest) => latest.clone(),
        None => {
            return Ok(super::html_template::HtmlTemplate(
                HomeTemplate::no_activity(),
            ))
        }
    };

    let longest = match activity_stats::find_longest(&activities) {
        Some(longest) => longest.clone(),
        None => latest.clone(),
    };

    let summary = activity_stats::monthly_distance_totals(&activities);
    let top_months = activity_stats::top_months(&summary.totals, 3);
    let route = decode_route(&latest.polyline);

    Ok(super::html_template::HtmlTemplate(HomeTemplate {
        has_activity: true,
        latest_name: latest.name,
        latest_distance: latest.distance,
        latest_average_speed: latest.average_speed,
        latest_date: latest.start_date_local,
        longest_name: longest.name,
        longest_distance: longest.distance,
        busiest_month: summary.busiest_month.unwrap_or("no month").to_string(),
        busiest_month_km: summary.busiest_total,
        top_months,
        route,
    }))
}

/// One decoded point of the ride's summary polyline.
struct RoutePoint {
    lat: f64,
    lng: f64,
}

/// Decodes a strava summary polyline (precision 5) into lat/lng pairs. An
/// empty or undecodable polyline renders as an empty route rather than an
/// error page.
fn decode_route(encoded: &str) -> Vec<RoutePoint> {
    if encoded.is_empty() {
        return Vec::new();
    }

    match polyline::decode_polyline(encoded, 5) {
        Ok(line) => line
            .points()
            .map(|point| RoutePoint {
                lat: point.y(),
                lng: point.x(),
            })
            .collect(),
        Err(err) => {
            warn!("Failed to decode route polyline: {}", err);
            Vec::new()
        }
    }
}

#[derive(askama::Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    has_activity: bool,
    latest_name: String,
    latest_distance: f64,
    latest_average_speed: f64,
    latest_date: String,
    longest_name: String,
    longest_distance: f64,
    busiest_month: String,
    busiest_month_km: f64,
    top_months: Vec<MonthTotal>,
    route: Vec<RoutePoint>,
}

impl HomeTemplate {
    fn no_activity() -> Self {
        Self {
            has_activity: false,
            latest_name: String::new(),
            latest_distance: 0.0,
            latest_average_speed: 0.0,
            latest_date: String::new(),
            longest_name: String::new(),
            longest_distance: 0.0,
            busiest_month: "no month".to_string(),
            busiest_month_km: 0.0,
            top_months: Vec::new(),
            route: Vec::new(),
        }
    }
}
