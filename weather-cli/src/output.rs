use std::fmt::Write;

use weather_core::WeatherReport;

/// Human-readable block, one field per line, trailing newline included.
pub fn render(report: &WeatherReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Weather: {}", report.description);
    let _ = writeln!(out, "Temperature: {}°C", report.temperature_c);
    let _ = writeln!(out, "Wind: {} km/h", report.wind_speed_kmph);
    let _ = writeln!(out, "Wind direction: {}", report.wind_direction);
    let _ = writeln!(out, "Temperature range:");
    let _ = writeln!(out, " - max: {}°C", report.max_temp_c);
    let _ = writeln!(out, " - min: {}°C", report.min_temp_c);
    out
}
