//! Shared fixtures: mocked Open-Meteo upstreams and a config pointing at them.

#![allow(dead_code)]

use chrono::{Duration, Timelike, Utc};
use weather_report::AppConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GEOCODING_PATH: &str = "/v1/search";
pub const FORECAST_PATH: &str = "/v1/forecast";

pub fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        geocoding_url: format!("{}{}", server.uri(), GEOCODING_PATH),
        forecast_url: format!("{}{}", server.uri(), FORECAST_PATH),
        ..AppConfig::default()
    }
}

pub fn geocoding_match(name: &str, latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "results": [{"name": name, "latitude": latitude, "longitude": longitude}]
    })
}

/// Forecast in UTC (offset 0) that starts an hour and a day before now, with
/// enough spare entries that the current hour or day rolling over mid-test
/// still leaves a full 24-hour / 7-day window.
pub fn forecast_body() -> serde_json::Value {
    let now = Utc::now().naive_utc();
    let first_hour = now.date().and_hms_opt(now.hour(), 0, 0).unwrap() - Duration::hours(1);
    let first_day = now.date() - Duration::days(1);
    let hours = 26;
    let days = 9;

    let times: Vec<String> = (0..hours)
        .map(|h| (first_hour + Duration::hours(h)).format("%Y-%m-%dT%H:%M").to_string())
        .collect();
    let dates: Vec<String> = (0..days)
        .map(|d| (first_day + Duration::days(d)).format("%Y-%m-%d").to_string())
        .collect();

    serde_json::json!({
        "latitude": 51.25,
        "longitude": 22.5,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "hourly": {
            "time": times,
            "temperature_2m": (0..hours).map(|h| 5.0 + h as f64 * 0.3).collect::<Vec<_>>(),
            "precipitation_probability": (0..hours).map(|h| (h * 7) % 100).collect::<Vec<_>>(),
            "snowfall": vec![0.0; hours as usize],
            "wind_speed_10m": vec![11.2; hours as usize],
        },
        "daily": {
            "time": dates,
            "temperature_2m_max": vec![9.4; days as usize],
            "temperature_2m_min": vec![-1.2; days as usize],
            "precipitation_probability_max": vec![60; days as usize],
            "snowfall_sum": vec![0.7; days as usize],
            "wind_speed_10m_max": vec![24.0; days as usize],
            "sunrise": dates.iter().map(|d| format!("{}T06:58", d)).collect::<Vec<_>>(),
            "sunset": dates.iter().map(|d| format!("{}T17:15", d)).collect::<Vec<_>>(),
        }
    })
}

/// Geocoder answers `place` with `geocoding`; the forecast API always succeeds.
pub async fn mount_upstreams(server: &MockServer, place: &str, geocoding: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(GEOCODING_PATH))
        .and(query_param("name", place))
        .respond_with(geocoding)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(server)
        .await;
}

/// Rows of the hourly and daily tables, in that order.
pub fn count_data_rows(report: &str) -> (usize, usize) {
    let rows = |separators: usize| {
        report
            .lines()
            .filter(|l| l.contains("°C") && l.matches(" | ").count() == separators)
            .count()
    };
    (rows(4), rows(7))
}
