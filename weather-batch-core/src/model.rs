use serde::Deserialize;

/// Subset of the OpenWeatherMap current-weather payload needed for the
/// human-readable summary. The raw body is persisted untouched; these
/// types exist only for the projection.
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub weather: Vec<Condition>,
    pub main: MainMetrics,
    pub wind: Wind,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub struct Wind {
    pub speed: f64,
}
