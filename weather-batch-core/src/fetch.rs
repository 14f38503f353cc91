use reqwest::Client;
use serde_json::Value;

use crate::error::WeatherError;

/// OpenWeatherMap current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Explicit fetcher configuration.
///
/// There are no process-wide credential or endpoint constants; callers
/// build one of these and hand it to [`WeatherFetcher::new`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub api_key: String,
    pub base_url: String,
}

impl FetcherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    config: FetcherConfig,
    http: Client,
}

impl WeatherFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch current weather for one city and return the raw JSON body.
    ///
    /// A non-success status becomes [`WeatherError::Status`] carrying the
    /// code and an excerpt of the body, which is where OpenWeather puts
    /// its diagnostic message.
    pub async fn fetch(&self, city: &str) -> Result<Value, WeatherError> {
        let res = self
            .http
            .get(self.config.base_url.as_str())
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let raw: Value = serde_json::from_str(&body)?;
        Ok(raw)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary so multi-byte text can't split.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_openweather_endpoint() {
        let config = FetcherConfig::new("KEY");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "KEY");
    }

    #[test]
    fn with_base_url_overrides_endpoint() {
        let config = FetcherConfig::new("KEY").with_base_url("http://localhost:9090");
        assert_eq!(config.base_url, "http://localhost:9090");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn truncation_respects_multi_byte_char_boundaries() {
        // 199 ASCII bytes, then two-byte chars straddling the cutoff.
        let body = format!("{}{}", "x".repeat(199), "é".repeat(60));
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated, format!("{}...", "x".repeat(199)));
    }

    #[test]
    fn short_error_bodies_pass_through() {
        assert_eq!(truncate_body("city not found"), "city not found");
    }
}
