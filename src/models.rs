use chrono::{NaiveDate, NaiveDateTime};

/// A geocoded place.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name, e.g. "Lublin, Polska"
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One hour of forecast, in the location's local time.
///
/// Numeric fields are `None` when the upstream array held `null` at that index.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub time: NaiveDateTime,
    /// Air temperature 2 m above ground in °C
    pub temperature_c: Option<f64>,
    /// Probability of precipitation in %
    pub precipitation_probability_pct: Option<f64>,
    /// Snowfall in cm
    pub snowfall_cm: Option<f64>,
    /// Wind speed 10 m above ground in km/h
    pub wind_speed_kmh: Option<f64>,
}

/// One calendar day of forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub temperature_min_c: Option<f64>,
    pub temperature_max_c: Option<f64>,
    pub precipitation_probability_max_pct: Option<f64>,
    pub snowfall_sum_cm: Option<f64>,
    pub wind_speed_max_kmh: Option<f64>,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
}

/// Hourly and daily series selected from one forecast response.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}

/// Everything the formatter needs for one place.
///
/// Built fresh per request: `hourly` holds 24 points and `daily` 7, both
/// ascending by time.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub location: Location,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}

impl ForecastReport {
    pub fn new(location: Location, forecast: Forecast) -> Self {
        Self {
            location,
            hourly: forecast.hourly,
            daily: forecast.daily,
        }
    }
}
