use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Structural part of the wttr.in payload that the parser requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    CurrentCondition,
    WeatherDescription,
    Forecast,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::CurrentCondition => "current_condition",
            Section::WeatherDescription => "current_condition[0].weatherDesc",
            Section::Forecast => "weather",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to get the raw body from the weather service.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather service failed")]
    Transport(#[from] reqwest::Error),

    #[error("could not grow response buffer beyond {received} bytes")]
    Buffer {
        received: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Failure to turn a response body into a [`WeatherReport`](crate::WeatherReport).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response is not valid JSON")]
    Decode(#[from] serde_json::Error),

    #[error("response has no usable `{0}` section")]
    Missing(Section),
}

impl ParseError {
    /// Numeric outcome code: 1 for bad JSON, 2..=4 for the missing section.
    pub fn code(&self) -> u8 {
        match self {
            ParseError::Decode(_) => 1,
            ParseError::Missing(Section::CurrentCondition) => 2,
            ParseError::Missing(Section::WeatherDescription) => 3,
            ParseError::Missing(Section::Forecast) => 4,
        }
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Network(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
