//! Serialization utilities for common data types
//!
//! Reusable serde helpers for payloads sent back to the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::time::timezone::{format_instant, parse_instant};

/// Serde helpers for `DateTime<Utc>` in the backend's `Z`-suffixed form.
///
/// # Usage
/// ```rust
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
/// use shiftclock_common::utc_instant;
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "utc_instant")]
///     clock_in: DateTime<Utc>,
/// }
/// ```
pub mod utc_instant {
    use super::*;

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    /// Serialize as `YYYY-MM-DDTHH:MM:SSZ`
    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_instant(*instant))
    }

    /// Deserialize any RFC 3339 timestamp, normalised to UTC
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_instant(&raw).map_err(serde::de::Error::custom)
    }

    /// Same helpers for optional instants (`null` when absent).
    pub mod option {
        use super::*;

        /// Serialize as a `Z`-suffixed string or `null`.
        pub fn serialize<S>(instant: &Option<DateTime<Utc>>, serializer: S) -> SerializeResult<S>
        where
            S: Serializer,
        {
            match instant {
                Some(instant) => serializer.serialize_some(&format_instant(*instant)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize from an ISO string or `null`.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| parse_instant(&raw).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for serialization utilities
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        #[serde(with = "utc_instant")]
        clock_in: DateTime<Utc>,
        #[serde(with = "utc_instant::option")]
        clock_out: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_serializes_whole_seconds_with_z() {
        let payload = Payload {
            clock_in: Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap(),
            clock_out: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"clock_in":"2025-01-15T14:30:00Z","clock_out":null}"#);
    }

    #[test]
    fn test_deserializes_offsets_into_utc() {
        let json = r#"{"clock_in":"2025-01-15T09:30:00-05:00","clock_out":"2025-01-15T22:00:00Z"}"#;
        let payload: Payload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.clock_in, Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap());
        assert_eq!(payload.clock_out, Some(Utc.with_ymd_and_hms(2025, 1, 15, 22, 0, 0).unwrap()));
    }

    #[test]
    fn test_rejects_malformed_instant() {
        let json = r#"{"clock_in":"not a time","clock_out":null}"#;
        let err = serde_json::from_str::<Payload>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid instant"));
    }
}
