//! Data models for chart analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Label used for visits whose country could not be resolved
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Raw click count for one time bucket, as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRecord {
    /// Bucket timestamp (date or date-time string)
    pub day: String,

    /// Click count; the backend sends it as a string, sometimes as a number
    #[serde(deserialize_with = "count_as_string")]
    pub count: String,
}

impl ClickRecord {
    pub fn new(day: impl Into<String>, count: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            count: count.into(),
        }
    }

    /// Parsed click count. Non-numeric values count as zero and negative
    /// values are clamped to zero.
    pub fn parsed_count(&self) -> u64 {
        self.count
            .trim()
            .parse::<i64>()
            .map(|n| n.max(0) as u64)
            .unwrap_or(0)
    }
}

fn count_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawCount::deserialize(deserializer)? {
        RawCount::Text(s) => s,
        RawCount::Number(n) => n.to_string(),
    })
}

/// Geographic information attached to a visit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoInfo {
    /// Country code or name
    #[serde(default)]
    pub country: Option<String>,
}

/// A single visit as returned by the backend. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    #[serde(default)]
    pub geo: Option<GeoInfo>,
}

impl GeoRecord {
    pub fn with_country(country: impl Into<String>) -> Self {
        Self {
            geo: Some(GeoInfo {
                country: Some(country.into()),
            }),
        }
    }

    /// Country label for grouping, falling back to [`UNKNOWN_COUNTRY`] when
    /// the country is absent or empty
    pub fn country_label(&self) -> &str {
        self.geo
            .as_ref()
            .and_then(|geo| geo.country.as_deref())
            .filter(|country| !country.is_empty())
            .unwrap_or(UNKNOWN_COUNTRY)
    }
}

/// One gap-filled point of a click time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Bucket start (serialized as Unix milliseconds)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub x: DateTime<Utc>,

    /// Clicks in the bucket
    pub y: u64,
}

/// One point of a categorical chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: u64,
}
