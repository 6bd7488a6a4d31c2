use serde::Deserialize;
use serde_json::Value;

/// Top-level body of an `action=cargoquery` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CargoResponse {
    #[serde(default)]
    pub cargoquery: Vec<CargoItem>,
    pub error: Option<CargoApiError>,
}

/// Cargo wraps every row in a `title` object.
#[derive(Debug, Clone, Deserialize)]
pub struct CargoItem {
    pub title: CargoRow,
}

/// Error object MediaWiki returns alongside a 200 status.
#[derive(Debug, Clone, Deserialize)]
pub struct CargoApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// One raw `MatchSchedule` row, as Cargo returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CargoRow {
    /// Naive UTC, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "DateTime UTC", default, deserialize_with = "null_as_empty")]
    pub date_time_utc: String,
    #[serde(rename = "Team1", default, deserialize_with = "null_as_empty")]
    pub team1: String,
    #[serde(rename = "Team2", default, deserialize_with = "null_as_empty")]
    pub team2: String,
    #[serde(rename = "OverviewPage", default, deserialize_with = "null_as_empty")]
    pub overview_page: String,
    #[serde(rename = "BestOf", default)]
    pub best_of: Option<String>,
    #[serde(rename = "Round", default)]
    pub round: Option<String>,
    #[serde(rename = "Stream", default)]
    pub stream: Option<String>,
    /// Cargo has returned this as a bool, a number and a string.
    #[serde(rename = "HasTime", default)]
    pub has_time: Option<Value>,
}

impl CargoRow {
    /// True only for `true`, `1` or `"1"`.
    pub fn has_exact_time(&self) -> bool {
        match &self.has_time {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64() == Some(1.0),
            Some(Value::String(s)) => s == "1",
            _ => false,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_has_time(has_time: Value) -> CargoRow {
        CargoRow {
            has_time: Some(has_time),
            ..Default::default()
        }
    }

    #[test]
    fn test_has_exact_time_variants() {
        assert!(row_with_has_time(Value::Bool(true)).has_exact_time());
        assert!(row_with_has_time(serde_json::json!(1)).has_exact_time());
        assert!(row_with_has_time(Value::String("1".into())).has_exact_time());

        assert!(!row_with_has_time(Value::Bool(false)).has_exact_time());
        assert!(!row_with_has_time(serde_json::json!(0)).has_exact_time());
        assert!(!row_with_has_time(Value::String("0".into())).has_exact_time());
        assert!(!row_with_has_time(Value::String("true".into())).has_exact_time());
        assert!(!row_with_has_time(Value::Null).has_exact_time());
        assert!(!CargoRow::default().has_exact_time());
    }

    #[test]
    fn test_deserialize_row_with_nulls() {
        let row: CargoRow = serde_json::from_value(serde_json::json!({
            "DateTime UTC": "2025-08-01 10:00:00",
            "Team1": "Gen.G",
            "Team2": null,
            "OverviewPage": "LCK/2025 Season",
            "BestOf": "3",
            "Round": null,
            "HasTime": "1",
            "DateTime UTC__precision": "0"
        }))
        .unwrap();

        assert_eq!(row.date_time_utc, "2025-08-01 10:00:00");
        assert_eq!(row.team1, "Gen.G");
        assert_eq!(row.team2, "");
        assert_eq!(row.best_of.as_deref(), Some("3"));
        assert_eq!(row.round, None);
        assert_eq!(row.stream, None);
        assert!(row.has_exact_time());
    }
}
