use std::path::PathBuf;

use tokio::task::JoinSet;
use tracing::error;

use crate::{error::WeatherError, fetch::WeatherFetcher, persist, report};

/// Outcome of one per-city unit, success or contained failure.
#[derive(Debug)]
pub struct CityOutcome {
    pub city: String,
    pub result: Result<PathBuf, WeatherError>,
}

impl CityOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Drives fetch → summarize → persist for each city, fanning the units
/// out concurrently.
#[derive(Debug, Clone)]
pub struct Pipeline {
    fetcher: WeatherFetcher,
    out_dir: PathBuf,
}

impl Pipeline {
    pub fn new(fetcher: WeatherFetcher, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            out_dir: out_dir.into(),
        }
    }

    /// One unit of work: fetch, print the summary, persist the raw body.
    ///
    /// Steps run in strict order and the first error aborts the unit; a
    /// response that fails to summarize is never written to disk.
    pub async fn run_city(&self, city: &str) -> Result<PathBuf, WeatherError> {
        let raw = self.fetcher.fetch(city).await?;

        let summary = report::summary(&raw)?;
        println!("Weather in {city}:\n{summary}");

        let path = persist::save(&self.out_dir, city, &raw).await?;
        println!("Weather data saved to {}", path.display());

        Ok(path)
    }

    /// Fan out over all cities and wait for every unit to finish.
    ///
    /// Units are spawned in input order and joined in completion order,
    /// whatever that turns out to be. A failing unit is logged with its
    /// city name and does not cancel its siblings; the batch itself
    /// cannot fail.
    pub async fn run_all(&self, cities: &[String]) -> Vec<CityOutcome> {
        let mut units = JoinSet::new();

        for city in cities {
            let pipeline = self.clone();
            let city = city.clone();

            units.spawn(async move {
                let result = pipeline.run_city(&city).await;
                if let Err(err) = &result {
                    error!("failed to update weather for {city}: {err}");
                }
                CityOutcome { city, result }
            });
        }

        let mut outcomes = Vec::with_capacity(cities.len());
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => error!("weather unit panicked: {err}"),
            }
        }

        outcomes
    }
}
