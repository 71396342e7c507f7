//! Forecast pipeline: place name → location → forecast → report.
//!
//! Each call runs the steps sequentially and keeps nothing between calls.

use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::ForecastReport;
use crate::services::geocoding::GeocodingClient;
use crate::services::open_meteo::OpenMeteoClient;
use crate::services::report::format_report;

/// Geocoder and forecast fetcher sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct WeatherService {
    geocoder: GeocodingClient,
    forecasts: OpenMeteoClient,
}

impl WeatherService {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            geocoder: GeocodingClient::new(client.clone(), &config.geocoding_url, &config.language),
            forecasts: OpenMeteoClient::new(client, &config.forecast_url),
        })
    }

    /// Resolve `place` and fetch its 24-hour and 7-day forecast.
    ///
    /// Any failure aborts the whole run; there are no partial reports.
    pub async fn report_for(&self, place: &str) -> Result<ForecastReport, AppError> {
        let location = self.geocoder.resolve(place).await?;
        let forecast = self
            .forecasts
            .fetch(location.latitude, location.longitude)
            .await?;

        Ok(ForecastReport::new(location, forecast))
    }

    /// Like [`report_for`](Self::report_for), rendered as text.
    pub async fn render(&self, place: &str) -> Result<String, AppError> {
        let report = self.report_for(place).await?;
        Ok(format_report(&report))
    }
}
