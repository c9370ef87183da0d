//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Selector Types** - values offered by the frequency and mode selects
//! - **Catalog Types** - timezone options for the timezone select
//! - **Submission Types** - outbound payload and in-flight status

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

// =============================================================================
// Selector Types
// =============================================================================

/// Sampling frequency of the scheduled distance-matrix runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Every 15 minutes
    Every15,
    /// Every 30 minutes
    Every30,
    /// Every 60 minutes
    Every60,
}

impl Frequency {
    /// All frequencies, in selector order.
    pub const ALL: [Frequency; 3] = [Frequency::Every15, Frequency::Every30, Frequency::Every60];

    /// Interval length in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Frequency::Every15 => 15,
            Frequency::Every30 => 30,
            Frequency::Every60 => 60,
        }
    }

    /// Human label for the select menu.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Every15 => "Every 15 minutes",
            Frequency::Every30 => "Every 30 minutes",
            Frequency::Every60 => "Every 60 minutes",
        }
    }

    /// `<option value>` for this frequency.
    pub fn option_value(&self) -> String {
        self.minutes().to_string()
    }

    /// Decode a select value. Anything other than 15, 30 or 60 is unset.
    pub fn from_option_value(value: &str) -> Option<Self> {
        match value.trim() {
            "15" => Some(Frequency::Every15),
            "30" => Some(Frequency::Every30),
            "60" => Some(Frequency::Every60),
            _ => None,
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.minutes())
    }
}

/// Travel mode the distance matrix is computed for.
///
/// Wire values are lowercase except `Car`, which the scheduling endpoint
/// expects capitalised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[serde(rename = "Car")]
    Car,
    Bus,
    Train,
    Walking,
    Bicycling,
}

impl TransportMode {
    /// All modes, in selector order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Walking,
        TransportMode::Bicycling,
    ];

    /// Value sent in the payload and used as `<option value>`.
    pub fn wire_value(&self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Walking => "walking",
            TransportMode::Bicycling => "bicycling",
        }
    }

    /// Human label for the select menu.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::Walking => "Walking",
            TransportMode::Bicycling => "Bicycling",
        }
    }

    /// Decode a select value. Only exact wire values are accepted.
    pub fn from_option_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.wire_value() == value)
    }
}

// =============================================================================
// Catalog Types
// =============================================================================

/// One entry of the timezone select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimezoneOption {
    /// Identifier plus current UTC offset, e.g. `Asia/Kolkata (+05:30)`
    pub label: String,
    /// Canonical IANA identifier
    pub value: String,
}

// =============================================================================
// Submission Types
// =============================================================================

/// Where a submission currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// Decoding the selected file
    Reading,
    /// Waiting on the scheduling endpoint
    Sending,
}

impl SubmissionStatus {
    /// Whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        !matches!(self, SubmissionStatus::Idle)
    }
}

/// JSON body posted to the scheduling endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmissionPayload {
    /// Raw text of the uploaded file
    pub file: String,
    #[serde(serialize_with = "serialize_utc_millis")]
    pub start_date_time: DateTime<Utc>,
    #[serde(serialize_with = "serialize_utc_millis")]
    pub end_date_time: DateTime<Utc>,
    #[serde(serialize_with = "serialize_unset_as_empty")]
    pub frequency: Option<Frequency>,
    #[serde(serialize_with = "serialize_unset_as_empty")]
    pub transport_mode: Option<TransportMode>,
    #[serde(serialize_with = "serialize_timezone")]
    pub timezone: Tz,
}

/// `2024-01-01T12:00:00.000Z`
fn serialize_utc_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Unselected selects are sent as `""`.
fn serialize_unset_as_empty<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

fn serialize_timezone<S: Serializer>(value: &Tz, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_frequency_decoding_is_closed() {
        assert_eq!(Frequency::from_option_value("30"), Some(Frequency::Every30));
        assert_eq!(Frequency::from_option_value(""), None);
        assert_eq!(Frequency::from_option_value("45"), None);
        assert_eq!(Frequency::from_option_value("15.0"), None);

        for frequency in Frequency::ALL {
            let decoded = Frequency::from_option_value(&frequency.option_value());
            assert_eq!(decoded, Some(frequency));
        }
    }

    #[test]
    fn test_transport_mode_decoding_is_closed() {
        assert_eq!(TransportMode::from_option_value("Car"), Some(TransportMode::Car));
        assert_eq!(TransportMode::from_option_value("car"), None);
        assert_eq!(TransportMode::from_option_value("Bus"), None);
        assert_eq!(TransportMode::from_option_value("plane"), None);
    }

    #[test]
    fn test_transport_mode_serializes_to_wire_value() {
        for mode in TransportMode::ALL {
            assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.wire_value()));
        }
    }

    #[test]
    fn test_payload_serialization() {
        let payload = SubmissionPayload {
            file: "a,b\n1,2".into(),
            start_date_time: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            end_date_time: Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap(),
            frequency: Some(Frequency::Every30),
            transport_mode: Some(TransportMode::Train),
            timezone: Tz::Europe__Berlin,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "file": "a,b\n1,2",
                "start_date_time": "2024-05-01T08:00:00.000Z",
                "end_date_time": "2024-05-01T18:30:00.000Z",
                "frequency": 30,
                "transport_mode": "train",
                "timezone": "Europe/Berlin",
            })
        );
    }

    #[test]
    fn test_unset_selectors_serialize_as_empty_strings() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let payload = SubmissionPayload {
            file: String::new(),
            start_date_time: now,
            end_date_time: now,
            frequency: None,
            transport_mode: None,
            timezone: Tz::UTC,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["frequency"], json!(""));
        assert_eq!(value["transport_mode"], json!(""));
        assert_eq!(value["timezone"], json!("UTC"));
    }

    #[test]
    fn test_status_busy() {
        assert!(!SubmissionStatus::Idle.is_busy());
        assert!(SubmissionStatus::Reading.is_busy());
        assert!(SubmissionStatus::Sending.is_busy());
    }
}
