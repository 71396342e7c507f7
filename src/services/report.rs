//! Plain-text rendering of a [`ForecastReport`].
//!
//! Two fixed-width tables: the next 24 hours and the next 7 days. Missing
//! values render as `-`.

use crate::models::{DailyPoint, ForecastReport, HourlyPoint};

const HOURLY_COLUMNS: [(&str, usize); 5] = [
    ("Hour", 5),
    ("Temp", 8),
    ("Rain", 5),
    ("Snow", 7),
    ("Wind", 9),
];

const DAILY_COLUMNS: [(&str, usize); 8] = [
    ("Day", 10),
    ("Min", 8),
    ("Max", 8),
    ("Rain", 5),
    ("Snow", 7),
    ("Wind", 9),
    ("Sunrise", 7),
    ("Sunset", 7),
];

/// Render the report. Deterministic, no I/O.
pub fn format_report(report: &ForecastReport) -> String {
    let mut lines = vec![
        format!("  Weather for: {}", report.location.name),
        String::new(),
        "NEXT 24 HOURS".to_string(),
        String::new(),
    ];

    lines.push(header_row(&HOURLY_COLUMNS));
    lines.push(divider(&HOURLY_COLUMNS));
    lines.extend(report.hourly.iter().map(hourly_row));

    lines.push(String::new());
    lines.push("7-DAY FORECAST".to_string());
    lines.push(String::new());

    lines.push(header_row(&DAILY_COLUMNS));
    lines.push(divider(&DAILY_COLUMNS));
    lines.extend(report.daily.iter().map(daily_row));

    lines.push(String::new());
    lines.join("\n")
}

fn hourly_row(point: &HourlyPoint) -> String {
    data_row(
        &HOURLY_COLUMNS,
        &[
            point.time.format("%H:%M").to_string(),
            temperature(point.temperature_c),
            percent(point.precipitation_probability_pct),
            snow(point.snowfall_cm),
            wind(point.wind_speed_kmh),
        ],
    )
}

fn daily_row(point: &DailyPoint) -> String {
    data_row(
        &DAILY_COLUMNS,
        &[
            point.date.format("%a %d.%m").to_string(),
            temperature(point.temperature_min_c),
            temperature(point.temperature_max_c),
            percent(point.precipitation_probability_max_pct),
            snow(point.snowfall_sum_cm),
            wind(point.wind_speed_max_kmh),
            clock(point.sunrise),
            clock(point.sunset),
        ],
    )
}

fn temperature(v: Option<f64>) -> String {
    v.map_or_else(missing, |t| format!("{:.1} °C", t))
}

fn percent(v: Option<f64>) -> String {
    v.map_or_else(missing, |p| format!("{:.0} %", p))
}

fn snow(v: Option<f64>) -> String {
    v.map_or_else(missing, |s| format!("{:.1} cm", s))
}

fn wind(v: Option<f64>) -> String {
    v.map_or_else(missing, |w| format!("{:.1} km/h", w))
}

fn clock(v: Option<chrono::NaiveDateTime>) -> String {
    v.map_or_else(missing, |t| t.format("%H:%M").to_string())
}

fn missing() -> String {
    "-".to_string()
}

fn header_row(columns: &[(&str, usize)]) -> String {
    let cells: Vec<String> = columns
        .iter()
        .map(|&(title, width)| format!("{:<width$}", title, width = width))
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn data_row(columns: &[(&str, usize)], values: &[String]) -> String {
    let cells: Vec<String> = columns
        .iter()
        .zip(values)
        .map(|(&(_, width), value)| format!("{:>width$}", value, width = width))
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn divider(columns: &[(&str, usize)]) -> String {
    let dashes: Vec<String> = columns.iter().map(|(_, width)| "-".repeat(*width)).collect();
    format!("+-{}-+", dashes.join("-+-"))
}
