//! Embedded energy meter sample data

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

/// Sample readings shipped with the binary
const SAMPLE_JSON: &str = include_str!("sample.json");

/// Total consumption for one calendar day
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct DayRecord {
    pub(crate) date: NaiveDate,
    #[serde(rename = "totalwatthr")]
    pub(crate) total_watt_hours: f64,
}

/// Consumption for one hour of a calendar day
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct HourRecord {
    pub(crate) date: NaiveDate,
    #[serde(deserialize_with = "deserialize_hour")]
    pub(crate) hour: u8,
    #[serde(rename = "totalwatthr")]
    pub(crate) total_watt_hours: f64,
}

/// Day-wise and hour-wise readings, fixed after load
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Dataset {
    #[serde(rename = "daywise_data")]
    pub(crate) days: Vec<DayRecord>,
    #[serde(rename = "hourwise_data")]
    pub(crate) hours: Vec<HourRecord>,
}

impl Dataset {
    /// Parse a dataset from its JSON document
    pub(crate) fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid dataset: {}", e))
    }

    /// Load the embedded sample set
    pub(crate) fn sample() -> Result<Self, String> {
        Self::from_json(SAMPLE_JSON)
    }
}

/// Hours arrive as zero-padded strings ("07"); plain integers are accepted too
fn deserialize_hour<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawHour {
        Text(String),
        Number(u8),
    }

    let hour = match RawHour::deserialize(deserializer)? {
        RawHour::Text(s) => s
            .trim()
            .parse::<u8>()
            .map_err(|_| de::Error::custom(format!("invalid hour: {:?}", s)))?,
        RawHour::Number(n) => n,
    };

    if hour > 23 {
        return Err(de::Error::custom(format!("hour out of range: {}", hour)));
    }
    Ok(hour)
}
