/// Placeholder used for any leaf field the service left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// Current conditions plus today's temperature range for one location.
///
/// Values are kept as the service sends them (text), no unit conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub description: String,
    pub temperature_c: String,
    pub wind_speed_kmph: String,
    pub wind_direction: String,
    pub min_temp_c: String,
    pub max_temp_c: String,
}
