//! Plain-text rendering of the view state.

use chrono::Local;
use weather_core::{WeatherReport, WeatherState};

const NOT_AVAILABLE: &str = "N/A";

/// Upper-case the first letter of each word and lower-case the rest.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Heading shows what the user typed, plus the API's name when they differ.
fn heading(city_input: &str, report: &WeatherReport) -> String {
    let input = city_input.trim();
    if input.is_empty() || input == report.location_name() {
        report.location_name().to_string()
    } else {
        format!("{input} ({})", report.location_name())
    }
}

pub fn render_report(city_input: &str, report: &WeatherReport) -> String {
    let description = report
        .description()
        .map(capitalize_words)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut lines = vec![
        heading(city_input, report),
        format!("  {:.1}°C  {description}", report.temperature()),
        format!("  Feels like / 体感温度: {:.1}°C", report.feels_like()),
        format!("  Humidity / 湿度: {}%", report.humidity()),
        format!("  Wind / 風速: {:.1} m/s", report.wind_speed()),
        format!("  Pressure / 気圧: {} hPa", report.pressure_hpa()),
    ];

    if let Some(url) = report.icon_url() {
        lines.push(format!("  Icon: {url}"));
    }

    lines.push(format!(
        "  Updated: {}",
        report.fetched_at().with_timezone(&Local).format("%H:%M:%S")
    ));

    lines.join("\n")
}

pub fn render_state(city_input: &str, state: &WeatherState) -> String {
    if state.is_loading() {
        return "Loading... / 読み込み中".to_string();
    }
    if let Some(error) = state.error() {
        return error.to_string();
    }
    match state.report() {
        Some(report) => render_report(city_input, report),
        None => String::new(),
    }
}
