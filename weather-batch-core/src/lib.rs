//! Core library for the `weather-batch` pipeline.
//!
//! This crate defines:
//! - The HTTP fetcher for current weather data
//! - Summary formatting and JSON persistence of raw responses
//! - The per-city unit of work and its concurrent fan-out
//!
//! It is used by `weather-batch-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod fetch;
pub mod model;
pub mod persist;
pub mod pipeline;
pub mod report;

pub use error::WeatherError;
pub use fetch::{DEFAULT_BASE_URL, FetcherConfig, WeatherFetcher};
pub use pipeline::{CityOutcome, Pipeline};
