use std::path::PathBuf;

use clap::Parser;
use weather_batch_core::{DEFAULT_BASE_URL, FetcherConfig, Pipeline, WeatherFetcher};

/// Placeholder credential, kept as the default so the binary runs without
/// any setup; every city then fails with 401 and an error line.
const PLACEHOLDER_API_KEY: &str = "your_openweathermap_api_key";

const DEFAULT_CITIES: [&str; 4] = ["London", "New York", "Tokyo", "Sydney"];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-batch",
    version,
    about = "Fetch, print and archive current weather for a set of cities"
)]
pub struct Cli {
    /// Cities to fetch, scheduled concurrently in the given order.
    #[arg(default_values_t = DEFAULT_CITIES.map(String::from))]
    pub cities: Vec<String>,

    /// OpenWeatherMap API key.
    #[arg(long, default_value = PLACEHOLDER_API_KEY)]
    pub api_key: String,

    /// Current-weather endpoint.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory to write the per-city JSON reports into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = FetcherConfig::new(self.api_key).with_base_url(self.base_url);
        let pipeline = Pipeline::new(WeatherFetcher::new(config), self.out_dir);

        // Per-city failures are reported inside the pipeline; the process
        // exits 0 no matter how many cities failed.
        pipeline.run_all(&self.cities).await;

        Ok(())
    }
}
