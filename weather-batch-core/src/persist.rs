use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::WeatherError;

/// Report filename for one city at one point in time.
///
/// Timestamp resolution is one second; two persists for the same city
/// within the same second map to the same name and the later write wins.
pub fn report_filename(city: &str, at: DateTime<Local>) -> String {
    format!("{city}_{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Serialize the raw response as 4-space-indented JSON and write it
/// under `dir`, returning the full path.
///
/// The timestamp in the name is sampled here, at persistence time, not
/// at fetch time.
pub async fn save(dir: &Path, city: &str, raw: &Value) -> Result<PathBuf, WeatherError> {
    let path = dir.join(report_filename(city, Local::now()));

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    raw.serialize(&mut ser)?;

    tokio::fs::write(&path, buf)
        .await
        .map_err(|source| WeatherError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn filename_embeds_city_and_second_resolution_timestamp() {
        let at = Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("unambiguous local time");

        assert_eq!(report_filename("London", at), "London_20240102_030405.json");
        assert_eq!(
            report_filename("New York", at),
            "New York_20240102_030405.json"
        );
    }

    #[tokio::test]
    async fn save_writes_indented_json_that_round_trips() {
        let dir = tempdir().expect("temp dir");
        let raw = json!({"main": {"temp": 15.0}});

        let path = save(dir.path(), "London", &raw).await.expect("save");
        let written = std::fs::read_to_string(&path).expect("read back");

        // 4-space indentation, not serde_json's default of 2.
        assert!(written.contains("\n    \"main\""));
        assert!(written.contains("\n        \"temp\""));

        let round_tripped: Value = serde_json::from_str(&written).expect("valid JSON");
        assert_eq!(round_tripped, raw);
    }

    #[tokio::test]
    async fn save_into_missing_directory_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("does-not-exist");

        let err = save(&missing, "London", &json!({})).await.unwrap_err();
        assert!(matches!(err, WeatherError::Io { .. }));
    }
}
