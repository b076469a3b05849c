//! Result records and the JOA aggregate
//!
//! Field names on the wire match what the browser host already consumes:
//! `{"timestamp", "ROM", "VERSION", "ring": {"MCP", "PIP", "DIP", "tipDist"},
//! "pinky": {..}, "JOA_ring", "JOA_pinky"}`. A measurement that could not
//! be taken is `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Joint-Oriented Aggregate: sum of absolute joint angles
pub fn joa<I>(angles: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    angles.into_iter().map(f64::abs).sum()
}

/// One finger's angles (degrees) and tip distance (ratio) for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointMetrics {
    #[serde(rename = "MCP")]
    pub mcp: Option<f64>,
    #[serde(rename = "PIP")]
    pub pip: Option<f64>,
    #[serde(rename = "DIP")]
    pub dip: Option<f64>,
    #[serde(rename = "tipDist")]
    pub tip_dist: Option<f64>,
}

impl JointMetrics {
    /// MCP, PIP, DIP in that order
    pub fn angles(&self) -> [Option<f64>; 3] {
        [self.mcp, self.pip, self.dip]
    }

    /// JOA over the angles that were measured
    pub fn joa(&self) -> f64 {
        joa(self.angles().into_iter().flatten())
    }
}

/// Full output for one analyzed frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Wall-clock UTC, millisecond precision
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "ROM")]
    pub rom: String,
    #[serde(rename = "VERSION")]
    pub version: String,
    pub ring: JointMetrics,
    pub pinky: JointMetrics,
    #[serde(rename = "JOA_ring")]
    pub joa_ring: f64,
    #[serde(rename = "JOA_pinky")]
    pub joa_pinky: f64,
}

/// `2026-01-02T07:30:00.123Z`, same as JS `Date.prototype.toISOString`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
