//! Open-Meteo geocoding client.
//!
//! Resolves a free-text place name to the first matching location.
//! See: https://open-meteo.com/en/docs/geocoding-api

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Location;

/// Client for the Open-Meteo geocoding search.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

// --- Open-Meteo JSON response types ---

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Omitted entirely by the API when nothing matches.
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl GeocodingClient {
    pub fn new(client: reqwest::Client, base_url: &str, language: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            language: language.to_string(),
        }
    }

    /// Resolve `place` to the upstream's best match.
    ///
    /// Only the first result is used; when several places share a name the
    /// upstream ranking decides.
    pub async fn resolve(&self, place: &str) -> Result<Location, AppError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(AppError::BadRequest("place name must not be empty".to_string()));
        }

        tracing::debug!("Geocoding '{}'", place);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", place),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "geocoding API returned HTTP {}",
                response.status()
            )));
        }

        let body: GeocodingResponse = response.json().await.map_err(|e| {
            AppError::Upstream(format!("geocoding API JSON parse error: {}", e))
        })?;

        let first = body
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| AppError::NotFound(format!("'{}'", place)))?;

        let location = Location {
            name: display_name(&first, place),
            latitude: first.latitude,
            longitude: first.longitude,
        };

        tracing::info!(
            "Resolved '{}' to {} ({:.4}, {:.4})",
            place,
            location.name,
            location.latitude,
            location.longitude
        );

        Ok(location)
    }
}

/// "Name, Country", or just the name when the upstream has no country.
fn display_name(result: &GeocodingResult, query: &str) -> String {
    let name = result.name.trim();
    let name = if name.is_empty() { query } else { name };

    match result.country.as_deref().map(str::trim) {
        Some(country) if !country.is_empty() => format!("{}, {}", name, country),
        _ => name.to_string(),
    }
}
