use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::{FetchError, WeatherError},
    model::WeatherReport,
    parse::parse_report,
};

pub mod wttr;

pub use wttr::WttrProvider;

/// Source of raw `format=j1` weather bodies for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_raw(&self, location: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetch the body for `location` and parse it into a report.
///
/// Nothing is parsed when the fetch fails.
pub async fn get_weather(
    provider: &dyn WeatherProvider,
    location: &str,
) -> Result<WeatherReport, WeatherError> {
    let body = provider.fetch_raw(location).await?;

    parse_report(&body).map_err(|err| {
        tracing::debug!(code = err.code(), %location, "weather response rejected: {err}");
        WeatherError::from(err)
    })
}
