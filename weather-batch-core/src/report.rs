use serde::de::Error as _;
use serde_json::Value;

use crate::{error::WeatherError, model::CurrentWeather};

/// Render the five-line summary from a raw API response.
///
/// Field order is part of the contract: description, temperature,
/// feels-like, humidity, wind speed. Any missing field fails the whole
/// projection; there is no partial summary.
pub fn summary(raw: &Value) -> Result<String, WeatherError> {
    let current: CurrentWeather = serde_json::from_value(raw.clone())?;

    let description = current
        .weather
        .first()
        .map(|c| c.description.as_str())
        .ok_or_else(|| serde_json::Error::custom("weather list is empty"))?;

    let temp = metric(current.main.temp);
    let feels_like = metric(current.main.feels_like);
    let humidity = current.main.humidity;
    let wind_speed = metric(current.wind.speed);

    Ok(format!(
        "Weather: {description}\n\
         Temperature: {temp}°C\n\
         Feels Like: {feels_like}°C\n\
         Humidity: {humidity}%\n\
         Wind Speed: {wind_speed} m/s"
    ))
}

/// Full precision, but whole values keep a trailing `.0` (15 → "15.0",
/// 15.25 → "15.25").
fn metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
