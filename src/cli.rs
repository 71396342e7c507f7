//! The `weather` command.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::errors::AppError;
use crate::services::forecast::WeatherService;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Hour-by-hour and 7-day weather for a place"
)]
pub struct Cli {
    /// Place name; several words are joined with spaces, e.g. `weather New York`.
    #[arg(required = true, num_args = 1.., value_name = "PLACE")]
    pub place: Vec<String>,
}

impl Cli {
    /// The place words joined into a single name.
    pub fn place_name(&self) -> String {
        self.place
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Write the report for the requested place to `out`.
    ///
    /// Nothing is written when the pipeline fails.
    pub async fn run<W: Write>(&self, service: &WeatherService, out: &mut W) -> Result<(), AppError> {
        let report = service.render(&self.place_name()).await?;

        out.write_all(report.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| AppError::Internal(format!("Failed to write report: {}", e)))
    }
}

/// Process exit status for a finished run; failures are reported on `err`.
pub fn exit_status<W: Write>(result: Result<(), AppError>, err: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing sensible left to do if stderr itself is gone.
            let _ = writeln!(err, "weather: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
