//! Hour-by-hour and 7-day weather reports for a named place.
//!
//! The same pipeline backs two entrypoints: the `weather` command-line tool
//! and the `weather-server` plain-text HTTP endpoint.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

pub use config::AppConfig;
pub use errors::AppError;
pub use models::{DailyPoint, ForecastReport, HourlyPoint, Location};
pub use services::forecast::WeatherService;
