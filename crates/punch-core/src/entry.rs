//! The checkpoint record and its status enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic role of a checkpoint: work started, work finished, or a
/// mid-work punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkStatus {
    Start,
    Finish,
    Doing,
}

impl WorkStatus {
    /// String representation used in the persisted slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Finish => "finish",
            Self::Doing => "doing",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkStatus {
    type Err = UnknownWorkStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "finish" => Ok(Self::Finish),
            "doing" => Ok(Self::Doing),
            _ => Err(UnknownWorkStatus(s.to_string())),
        }
    }
}

impl Serialize for WorkStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown status strings.
#[derive(Debug, Clone)]
pub struct UnknownWorkStatus(String);

impl fmt::Display for UnknownWorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown work status: {}", self.0)
    }
}

impl std::error::Error for UnknownWorkStatus {}

/// One checkpoint in the work log.
///
/// `time` is epoch milliseconds in local wall-clock terms. `None` marks a
/// placeholder row still awaiting user input; epoch zero is a valid
/// timestamp, not a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    /// Role of this checkpoint.
    pub status: WorkStatus,
    /// When the checkpoint occurred, if timestamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Free-text label for the work being tracked. May be empty.
    #[serde(default)]
    pub desc: String,
}

impl WorkEntry {
    /// A checkpoint stamped at the given time with an empty description.
    #[must_use]
    pub const fn stamped(status: WorkStatus, time_ms: i64) -> Self {
        Self {
            status,
            time: Some(time_ms),
            desc: String::new(),
        }
    }

    /// A placeholder row: `start`, no time, empty description.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            status: WorkStatus::Start,
            time: None,
            desc: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip_all_variants() {
        for status in [WorkStatus::Start, WorkStatus::Finish, WorkStatus::Doing] {
            let s = status.to_string();
            let parsed: WorkStatus = s.parse().expect("should parse");
            assert_eq!(parsed, status, "roundtrip failed for {status:?}");
        }
    }

    #[test]
    fn unknown_status_errors() {
        let result: Result<WorkStatus, _> = "paused".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "unknown work status: paused");
    }

    #[test]
    fn entry_serialization_roundtrip() {
        let entry = WorkEntry {
            status: WorkStatus::Doing,
            time: Some(1_700_000_000_000),
            desc: "写周报".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: WorkEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entry);
    }

    #[test]
    fn placeholder_serializes_without_time() {
        let json = serde_json::to_string(&WorkEntry::placeholder()).unwrap();
        assert_eq!(json, r#"{"status":"start","desc":""}"#);
    }

    #[test]
    fn entry_parses_legacy_shape_without_time() {
        // Earlier slot revisions omit `time` for placeholder rows.
        let entry: WorkEntry = serde_json::from_str(r#"{"status":"finish","desc":"x"}"#).unwrap();
        assert_eq!(entry.status, WorkStatus::Finish);
        assert_eq!(entry.time, None);
        assert_eq!(entry.desc, "x");
    }

    #[test]
    fn entry_rejects_unknown_status() {
        let result: Result<WorkEntry, _> =
            serde_json::from_str(r#"{"status":"paused","desc":""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn epoch_zero_is_a_real_timestamp() {
        let entry: WorkEntry =
            serde_json::from_str(r#"{"status":"start","time":0,"desc":""}"#).unwrap();
        assert_eq!(entry.time, Some(0));
    }
}
