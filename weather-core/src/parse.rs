//! Defensive extraction of a [`WeatherReport`] from a wttr.in `format=j1` body.
//!
//! Works over [`serde_json::Value`] instead of typed structs: a structural key
//! of the wrong type is a missing section, not a decode failure.

use serde_json::Value;

use crate::{
    error::{ParseError, Section},
    model::{NOT_AVAILABLE, WeatherReport},
};

/// Longest description kept, in bytes.
pub const DESCRIPTION_CAPACITY: usize = 49;
/// Longest value kept for every other field, in bytes.
pub const FIELD_CAPACITY: usize = 9;

/// Parse a raw response body, short-circuiting on the first missing section.
pub fn parse_report(body: &[u8]) -> Result<WeatherReport, ParseError> {
    let root: Value = serde_json::from_slice(body)?;

    let condition = first_entry(&root, "current_condition")
        .ok_or(ParseError::Missing(Section::CurrentCondition))?;

    let temperature_c = text_field(condition, "temp_C", FIELD_CAPACITY);
    let wind_speed_kmph = text_field(condition, "windspeedKmph", FIELD_CAPACITY);
    let wind_direction = text_field(condition, "winddir16Point", FIELD_CAPACITY);

    let desc = first_entry(condition, "weatherDesc")
        .ok_or(ParseError::Missing(Section::WeatherDescription))?;
    let description = text_field(desc, "value", DESCRIPTION_CAPACITY);

    let today = first_entry(&root, "weather").ok_or(ParseError::Missing(Section::Forecast))?;

    Ok(WeatherReport {
        description,
        temperature_c,
        wind_speed_kmph,
        wind_direction,
        min_temp_c: text_field(today, "mintempC", FIELD_CAPACITY),
        max_temp_c: text_field(today, "maxtempC", FIELD_CAPACITY),
    })
}

/// First element of `parent[key]`, if that is a non-empty array.
fn first_entry<'a>(parent: &'a Value, key: &str) -> Option<&'a Value> {
    parent.get(key)?.as_array()?.first()
}

fn text_field(parent: &Value, key: &str, capacity: usize) -> String {
    let raw = match parent.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    };
    truncate_to(raw, capacity)
}

/// Cut `s` to at most `max` bytes without splitting a character.
fn truncate_to(mut s: String, max: usize) -> String {
    if s.len() > max {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
