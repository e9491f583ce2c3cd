use anyhow::Context;
use clap::Parser;
use weather_core::{WeatherProvider, WttrProvider, get_weather};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Current weather and today's temperature range from wttr.in"
)]
pub struct Cli {
    /// Location name, e.g. "London" or "Saint-Petersburg".
    ///
    /// A name starting with '-' goes after `--`.
    pub location: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let provider = WttrProvider::new();
        let text = self.report(&provider).await?;
        print!("{text}");
        Ok(())
    }

    async fn report(&self, provider: &dyn WeatherProvider) -> anyhow::Result<String> {
        let report = get_weather(provider, &self.location)
            .await
            .with_context(|| format!("Failed to get weather data for location: {}", self.location))?;

        Ok(output::render(&report))
    }
}
