//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The wttr.in fetch capability, behind the [`WeatherProvider`] trait
//! - Defensive parsing of `format=j1` bodies into a [`WeatherReport`]
//! - Typed errors for network, decode and missing-section failures
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod model;
pub mod parse;
pub mod provider;

pub use error::{FetchError, ParseError, Section, WeatherError};
pub use model::WeatherReport;
pub use parse::parse_report;
pub use provider::{WeatherProvider, WttrProvider, get_weather};
