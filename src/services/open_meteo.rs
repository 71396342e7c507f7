//! Open-Meteo forecast client.
//!
//! Fetches hourly and daily series for a coordinate pair and cuts them down to
//! the window shown in a report: the next 24 hours and the next 7 days.
//! See: https://open-meteo.com/en/docs

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{DailyPoint, Forecast, HourlyPoint};

/// Number of hourly points in a report.
pub const REPORT_HOURS: usize = 24;
/// Number of daily points in a report.
pub const REPORT_DAYS: usize = 7;

const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,snowfall,wind_speed_10m";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_probability_max,\
snowfall_sum,wind_speed_10m_max,sunrise,sunset";

/// Client for the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

// --- Open-Meteo JSON response types ---
//
// Series come back as parallel arrays keyed by position. Individual values may
// be null, whole arrays may not.

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    utc_offset_seconds: i64,
    hourly: HourlySeries,
    daily: DailySeries,
}

#[derive(Debug, Deserialize)]
struct HourlySeries {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    precipitation_probability: Vec<Option<f64>>,
    snowfall: Vec<Option<f64>>,
    wind_speed_10m: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    precipitation_probability_max: Vec<Option<f64>>,
    snowfall_sum: Vec<Option<f64>>,
    wind_speed_10m_max: Vec<Option<f64>>,
    sunrise: Vec<Option<String>>,
    sunset: Vec<Option<String>>,
}

impl OpenMeteoClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch the forecast for a location and select the report window.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Forecast, AppError> {
        let raw = self.fetch_raw(latitude, longitude).await?;
        select_window(raw, Utc::now())
    }

    async fn fetch_raw(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, AppError> {
        tracing::debug!("Fetching forecast for ({:.4}, {:.4})", latitude, longitude);

        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", REPORT_DAYS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("forecast request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "forecast API returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("forecast API JSON parse error: {}", e)))
    }
}

/// Select the report window from a raw forecast.
///
/// Pure function: `now` is shifted into the location's local time using the
/// response's UTC offset, so the first hourly point is the current local hour
/// and the first daily point is the local today.
pub(crate) fn select_window(
    raw: ForecastResponse,
    now: DateTime<Utc>,
) -> Result<Forecast, AppError> {
    let offset = i32::try_from(raw.utc_offset_seconds)
        .ok()
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            AppError::Upstream(format!(
                "invalid utc_offset_seconds {}",
                raw.utc_offset_seconds
            ))
        })?;
    let local_now = now.with_timezone(&offset).naive_local();
    let current_hour = local_now
        .date()
        .and_hms_opt(local_now.hour(), 0, 0)
        .unwrap_or(local_now);

    let hourly = select_hours(raw.hourly, current_hour)?;
    let daily = select_days(raw.daily, local_now.date())?;

    Ok(Forecast { hourly, daily })
}

fn select_hours(
    series: HourlySeries,
    from: NaiveDateTime,
) -> Result<Vec<HourlyPoint>, AppError> {
    let len = series.time.len();
    check_lengths(
        "hourly",
        len,
        &[
            series.temperature_2m.len(),
            series.precipitation_probability.len(),
            series.snowfall.len(),
            series.wind_speed_10m.len(),
        ],
    )?;

    let mut points = Vec::with_capacity(REPORT_HOURS);
    for i in 0..len {
        let time = parse_local_time(&series.time[i])?;
        if time < from {
            continue;
        }
        points.push(HourlyPoint {
            time,
            temperature_c: series.temperature_2m[i],
            precipitation_probability_pct: series.precipitation_probability[i],
            snowfall_cm: series.snowfall[i],
            wind_speed_kmh: series.wind_speed_10m[i],
        });
        if points.len() == REPORT_HOURS {
            return Ok(points);
        }
    }

    Err(AppError::Upstream(format!(
        "forecast has only {} hourly entries from {}, expected {}",
        points.len(),
        from.format("%Y-%m-%d %H:%M"),
        REPORT_HOURS
    )))
}

fn select_days(series: DailySeries, from: NaiveDate) -> Result<Vec<DailyPoint>, AppError> {
    let len = series.time.len();
    check_lengths(
        "daily",
        len,
        &[
            series.temperature_2m_max.len(),
            series.temperature_2m_min.len(),
            series.precipitation_probability_max.len(),
            series.snowfall_sum.len(),
            series.wind_speed_10m_max.len(),
            series.sunrise.len(),
            series.sunset.len(),
        ],
    )?;

    let mut points = Vec::with_capacity(REPORT_DAYS);
    for i in 0..len {
        let date = NaiveDate::parse_from_str(&series.time[i], "%Y-%m-%d").map_err(|e| {
            AppError::Upstream(format!("invalid forecast date '{}': {}", series.time[i], e))
        })?;
        if date < from {
            continue;
        }
        points.push(DailyPoint {
            date,
            temperature_min_c: series.temperature_2m_min[i],
            temperature_max_c: series.temperature_2m_max[i],
            precipitation_probability_max_pct: series.precipitation_probability_max[i],
            snowfall_sum_cm: series.snowfall_sum[i],
            wind_speed_max_kmh: series.wind_speed_10m_max[i],
            sunrise: series.sunrise[i].as_deref().map(parse_local_time).transpose()?,
            sunset: series.sunset[i].as_deref().map(parse_local_time).transpose()?,
        });
        if points.len() == REPORT_DAYS {
            return Ok(points);
        }
    }

    Err(AppError::Upstream(format!(
        "forecast has only {} daily entries from {}, expected {}",
        points.len(),
        from,
        REPORT_DAYS
    )))
}

/// Every array in a series must line up with its `time` array.
fn check_lengths(series: &str, expected: usize, lengths: &[usize]) -> Result<(), AppError> {
    if lengths.iter().all(|&l| l == expected) {
        Ok(())
    } else {
        Err(AppError::Upstream(format!(
            "{} arrays have mismatched lengths (time has {}, fields have {:?})",
            series, expected, lengths
        )))
    }
}

/// Parse an Open-Meteo local timestamp ("2026-03-01T07:00", seconds optional).
fn parse_local_time(s: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| AppError::Upstream(format!("invalid forecast time '{}': {}", s, e)))
}
