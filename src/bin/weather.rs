//! Binary for the `weather` command-line tool.
//!
//! Prints the report for the place named on the command line. Logs go to
//! stderr so stdout only ever carries the report.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_report::cli::{self, Cli};
use weather_report::{AppConfig, WeatherService};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = Cli::parse();
    let config = AppConfig::default();

    let result = match WeatherService::new(&config) {
        Ok(service) => command.run(&service, &mut std::io::stdout()).await,
        Err(e) => Err(e),
    };

    cli::exit_status(result, &mut std::io::stderr())
}
