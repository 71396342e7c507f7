//! Weather report HTTP endpoint.
//!
//! GET /{place} — plain-text report for a place name. The name is the rest of
//! the path, percent-decoded, so `/New%20York` and `/New York` are the same.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

use crate::errors::AppError;
use crate::services::forecast::WeatherService;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Get the 24-hour and 7-day weather report for a place.
#[utoipa::path(
    get,
    path = "/{place}",
    tag = "Weather",
    params(
        ("place" = String, Path, description = "Place name, e.g. \"Lublin\" or \"New York\""),
    ),
    responses(
        (status = 200, description = "Plain-text weather report", body = String, content_type = "text/plain"),
        (status = 400, description = "Blank place name", body = String, content_type = "text/plain"),
        (status = 404, description = "No geocoding match for the place", body = String, content_type = "text/plain"),
        (status = 502, description = "Geocoding or forecast API failed", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_weather_report(
    State(service): State<WeatherService>,
    Path(place): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let place = place.trim_matches('/').trim();
    tracing::debug!("Weather report requested for '{}'", place);

    let report = service.render(place).await?;
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], report))
}

/// Usage hint for requests without a place name.
pub async fn usage() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        "Usage: GET /<place name>, e.g. /Lublin or /New%20York\n",
    )
}
