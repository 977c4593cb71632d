use chrono::{Datelike, Month, NaiveDateTime};
use tracing::warn;

use crate::strava_api_service::Activity;

/// Timestamp format strava uses for `start_date_local`.
const START_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Per-month distance totals plus the busiest month. Buckets are keyed by
/// month number only: a January ride from 2022 and one from 2023 land in the
/// same bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// `None` means there was nothing to total up
    pub busiest_month: Option<&'static str>,
    /// rounded to whole km for display
    pub busiest_total: f64,
    /// month number -> km, in the order months first appear in the input
    pub totals: Vec<(u32, f64)>,
}

/// A single row of the "top months" list on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    pub name: &'static str,
    pub km: f64,
}

/// Returns the activity with the greatest distance, or `None` when there is
/// nothing to compare. Strict comparison, so the first of equally long rides
/// wins.
pub fn find_longest(activities: &[Activity]) -> Option<&Activity> {
    let mut longest: Option<&Activity> = None;
    for activity in activities {
        match longest {
            Some(current) if activity.distance <= current.distance => {}
            _ => longest = Some(activity),
        }
    }
    longest
}

/// Accumulates distance per month and picks the busiest one. Totals are kept
/// in first-encountered order, which makes the tie-break deterministic: the
/// month that shows up first in the input wins.
pub fn monthly_distance_totals(activities: &[Activity]) -> MonthlySummary {
    let mut totals: Vec<(u32, f64)> = Vec::new();

    for activity in activities {
        let start_date =
            match NaiveDateTime::parse_from_str(&activity.start_date_local, START_DATE_FORMAT) {
                Ok(date) => date,
                Err(err) => {
                    warn!(
                        "Skipping activity {} with unparseable start date {:?}: {}",
                        activity.id, activity.start_date_local, err
                    );
                    continue;
                }
            };

        let month = start_date.month();
        match totals.iter_mut().find(|(m, _)| *m == month) {
            Some((_, km)) => *km += activity.distance,
            None => totals.push((month, activity.distance)),
        }
    }

    let mut busiest: Option<(u32, f64)> = None;
    for &(month, km) in &totals {
        match busiest {
            Some((_, max_km)) if km <= max_km => {}
            _ => busiest = Some((month, km)),
        }
    }

    MonthlySummary {
        busiest_month: busiest.map(|(month, _)| month_name(month)),
        busiest_total: busiest.map(|(_, km)| km.round()).unwrap_or(0.0),
        totals,
    }
}

/// Top `count` months by distance, rounded to whole km for display. The sort
/// is stable, so months with equal totals keep their first-encountered order.
pub fn top_months(totals: &[(u32, f64)], count: usize) -> Vec<MonthTotal> {
    let mut rows: Vec<MonthTotal> = totals
        .iter()
        .map(|&(month, km)| MonthTotal {
            name: month_name(month),
            km: km.round(),
        })
        .collect();
    rows.sort_by(|a, b| b.km.partial_cmp(&a.km).unwrap_or(std::cmp::Ordering::Equal));
    rows.truncate(count);
    rows
}

/// English month name for a 1-12 month number.
pub fn month_name(month: u32) -> &'static str {
    match Month::try_from(month as u8) {
        Ok(month) => month.name(),
        Err(_) => "Unknown",
    }
}
