//! Typed, read-only view over flight records.
//!
//! The client passes records through as opaque JSON. This module projects them
//! onto the fields the backend currently emits, for callers that want to
//! summarize or display them. Every field is optional and unknown fields are
//! ignored, so backend changes degrade to `None` instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Scores below this are labelled inefficient by the backend.
pub const EFFICIENCY_THRESHOLD: f64 = 80.0;

/// Analysis label attached to a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    Optimal,
    Inefficient,
    /// Position data only; no prediction or weather join.
    Raw,
    Unknown,
}

impl FlightStatus {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Optimal") => FlightStatus::Optimal,
            Some("Inefficient") => FlightStatus::Inefficient,
            Some("Raw") => FlightStatus::Raw,
            _ => FlightStatus::Unknown,
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlightStatus::Optimal => "Optimal",
            FlightStatus::Inefficient => "Inefficient",
            FlightStatus::Raw => "Raw",
            FlightStatus::Unknown => "Unknown",
        };
        f.pad(s)
    }
}

/// Projection of one flight record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flight {
    pub icao24: Option<String>,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub velocity: Option<f64>,
    pub predicted_velocity: Option<f64>,
    pub efficiency_score: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub baro_altitude: Option<f64>,
    pub geo_altitude: Option<f64>,
    pub temperature_c: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction: Option<f64>,
    pub plane_heading: Option<f64>,
    pub wind_offset_angle: Option<f64>,
    pub weather_code: Option<f64>,
    pub status: Option<String>,
}

impl Flight {
    /// `None` if the record is not an object or a known field has the wrong type.
    pub fn from_record(record: &Value) -> Option<Flight> {
        if !record.is_object() {
            return None;
        }
        Flight::deserialize(record).ok()
    }

    /// The backend label, or the efficiency threshold when the label is missing.
    pub fn status(&self) -> FlightStatus {
        match FlightStatus::from_label(self.status.as_deref()) {
            FlightStatus::Unknown => match self.efficiency_score {
                Some(score) if score < EFFICIENCY_THRESHOLD => FlightStatus::Inefficient,
                Some(_) => FlightStatus::Optimal,
                None => FlightStatus::Unknown,
            },
            known => known,
        }
    }

    /// Callsign as broadcast, without the transponder's space padding.
    pub fn callsign(&self) -> Option<&str> {
        self.callsign
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Count of flights per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub total: usize,
    pub optimal: usize,
    pub inefficient: usize,
    pub raw: usize,
    pub unknown: usize,
}

impl FlightSummary {
    /// Records that cannot be projected count as `Unknown`.
    pub fn from_records(records: &[Value]) -> Self {
        let mut summary = FlightSummary::default();
        for record in records {
            let status = Flight::from_record(record)
                .map(|f| f.status())
                .unwrap_or(FlightStatus::Unknown);
            summary.record(status);
        }
        summary
    }

    fn record(&mut self, status: FlightStatus) {
        self.total += 1;
        match status {
            FlightStatus::Optimal => self.optimal += 1,
            FlightStatus::Inefficient => self.inefficient += 1,
            FlightStatus::Raw => self.raw += 1,
            FlightStatus::Unknown => self.unknown += 1,
        }
    }

    pub fn count(&self, status: FlightStatus) -> usize {
        match status {
            FlightStatus::Optimal => self.optimal,
            FlightStatus::Inefficient => self.inefficient,
            FlightStatus::Raw => self.raw,
            FlightStatus::Unknown => self.unknown,
        }
    }

    /// Flights with a prediction (optimal or inefficient).
    pub fn analyzed(&self) -> usize {
        self.optimal + self.inefficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projects_analyzed_record() {
        let record = json!({
            "icao24": "4ca7b5",
            "callsign": "RYR12AB ",
            "origin_country": "Ireland",
            "velocity": 231.5,
            "predicted_velocity": 240.0,
            "efficiency_score": 72.4,
            "latitude": 53.42,
            "longitude": -6.27,
            "weather_code": 3,
            "status": "Inefficient"
        });

        let flight = Flight::from_record(&record).unwrap();
        assert_eq!(flight.icao24.as_deref(), Some("4ca7b5"));
        assert_eq!(flight.callsign(), Some("RYR12AB"));
        assert_eq!(flight.weather_code, Some(3.0));
        assert_eq!(flight.position(), Some((53.42, -6.27)));
        assert_eq!(flight.status(), FlightStatus::Inefficient);
    }

    #[test]
    fn raw_record_has_null_analysis_fields() {
        let record = json!({
            "icao24": "a1b2c3",
            "callsign": "",
            "velocity": 180.0,
            "predicted_velocity": null,
            "efficiency_score": null,
            "geo_altitude": 10500.0,
            "status": "Raw"
        });

        let flight = Flight::from_record(&record).unwrap();
        assert_eq!(flight.status(), FlightStatus::Raw);
        assert_eq!(flight.callsign(), None);
        assert_eq!(flight.efficiency_score, None);
        assert_eq!(flight.position(), None);
    }

    #[test]
    fn missing_label_falls_back_to_threshold() {
        let low = Flight {
            efficiency_score: Some(79.9),
            ..Flight::default()
        };
        let high = Flight {
            efficiency_score: Some(80.0),
            ..Flight::default()
        };
        assert_eq!(low.status(), FlightStatus::Inefficient);
        assert_eq!(high.status(), FlightStatus::Optimal);
        assert_eq!(Flight::default().status(), FlightStatus::Unknown);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let flight = Flight::from_record(&json!({"id": 1, "origin": "JFK"})).unwrap();
        assert_eq!(flight, Flight::default());
    }

    #[test]
    fn non_object_or_mistyped_is_none() {
        assert!(Flight::from_record(&json!([1, 2])).is_none());
        assert!(Flight::from_record(&json!("KLM1023")).is_none());
        assert!(Flight::from_record(&json!({"velocity": "fast"})).is_none());
    }

    #[test]
    fn summary_counts_statuses() {
        let records = vec![
            json!({"status": "Optimal"}),
            json!({"status": "Optimal"}),
            json!({"status": "Inefficient"}),
            json!({"status": "Raw"}),
            json!({"status": "Grounded"}),
            json!(42),
        ];

        let summary = FlightSummary::from_records(&records);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.count(FlightStatus::Optimal), 2);
        assert_eq!(summary.count(FlightStatus::Inefficient), 1);
        assert_eq!(summary.count(FlightStatus::Raw), 1);
        assert_eq!(summary.count(FlightStatus::Unknown), 2);
        assert_eq!(summary.analyzed(), 3);
    }

    #[test]
    fn empty_summary() {
        assert_eq!(FlightSummary::from_records(&[]), FlightSummary::default());
    }
}
