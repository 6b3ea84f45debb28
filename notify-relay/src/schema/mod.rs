//! Record shapes and the mode that selects between them.
//!
//! Exactly one shape is active per process, chosen by the configured
//! message type:
//!
//! ```text
//! MESSAGE_TYPE=EVENT → StorageEventRecords (bucket notifications)
//! MESSAGE_TYPE=AUDIT → AuditLog (gateway audit entries)
//! ```

pub mod audit;
mod de;
pub mod event;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use audit::AuditLog;
pub use event::{StorageEvent, StorageEventRecords};

use crate::error::RelayError;

/// Which record shape the relay decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    Event,
    Audit,
}

/// Configured message type that names neither shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message type: {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for RelayMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EVENT" => Ok(RelayMode::Event),
            "AUDIT" => Ok(RelayMode::Audit),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for RelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayMode::Event => f.write_str("EVENT"),
            RelayMode::Audit => f.write_str("AUDIT"),
        }
    }
}

impl RelayMode {
    /// Decode a request body into this mode's record shape.
    ///
    /// Unknown fields are ignored; malformed JSON, a wrong top-level type or
    /// trailing data after the value are errors.
    pub fn decode(self, body: &[u8]) -> Result<RelayRecord, RelayError> {
        expect_object(body)?;

        let record = match self {
            RelayMode::Event => RelayRecord::Event(serde_json::from_slice(body)?),
            RelayMode::Audit => RelayRecord::Audit(serde_json::from_slice(body)?),
        };
        Ok(record)
    }
}

/// Derived structs also accept the sequence form (`[...]`), which the
/// gateway never sends. Only a top-level object is a record.
fn expect_object(body: &[u8]) -> Result<(), serde_json::Error> {
    match body.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') | None => Ok(()),
        Some(_) => Err(serde::de::Error::custom("expected a JSON object")),
    }
}

/// A decoded notification, ready to be relayed.
///
/// Serializes untagged: the message body is the inner shape's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RelayRecord {
    Event(StorageEventRecords),
    Audit(AuditLog),
}

impl RelayRecord {
    pub fn mode(&self) -> RelayMode {
        match self {
            RelayRecord::Event(_) => RelayMode::Event,
            RelayRecord::Audit(_) => RelayMode::Audit,
        }
    }

    /// Re-encode the record as the queue message body.
    pub fn to_message_body(&self) -> Result<String, RelayError> {
        serde_json::to_string(self).map_err(RelayError::Marshal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("EVENT".parse::<RelayMode>(), Ok(RelayMode::Event));
        assert_eq!("AUDIT".parse::<RelayMode>(), Ok(RelayMode::Audit));
        assert_eq!(
            "event".parse::<RelayMode>(),
            Err(UnknownMode("event".to_string()))
        );
        assert!("".parse::<RelayMode>().is_err());
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in [RelayMode::Event, RelayMode::Audit] {
            assert_eq!(mode.to_string().parse::<RelayMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_event_body_reencodes_to_same_record() {
        let body = br#"{"Records":[{"eventVersion":"2.1","eventName":"s3:ObjectCreated:Put","s3":{"object":{"key":"a.txt","size":42}}}]}"#;

        let record = RelayMode::Event.decode(body).unwrap();
        assert_eq!(record.mode(), RelayMode::Event);

        let message = record.to_message_body().unwrap();
        let again = RelayMode::Event.decode(message.as_bytes()).unwrap();
        assert_eq!(again, record);

        match again {
            RelayRecord::Event(e) => {
                assert_eq!(e.records[0].s3.object.key, "a.txt");
                assert_eq!(e.records[0].s3.object.size, 42);
            }
            _ => panic!("Expected Event variant"),
        }
    }

    #[test]
    fn test_audit_body_reencodes_to_same_record() {
        let body = br#"{"version":"1","api":{"name":"PutObject","statusCode":200}}"#;

        let record = RelayMode::Audit.decode(body).unwrap();
        let message = record.to_message_body().unwrap();
        let again = RelayMode::Audit.decode(message.as_bytes()).unwrap();
        assert_eq!(again, record);

        let value: serde_json::Value = serde_json::from_str(&message).unwrap();
        assert_eq!(value["api"]["name"], "PutObject");
        assert_eq!(value["api"]["statusCode"], 200);
        assert!(value.get("Audit").is_none());
    }

    #[test]
    fn test_malformed_bodies_rejected() {
        let cases: [&[u8]; 5] = [
            br#"{"Records":[{"eventName":"#,
            br#"[]"#,
            br#""Records""#,
            br#"{"version":"\q"}"#,
            br#"{"version":"1"} trailing"#,
        ];

        for body in cases {
            assert!(
                matches!(RelayMode::Audit.decode(body), Err(RelayError::Decode(_))),
                "accepted {:?}",
                String::from_utf8_lossy(body)
            );
        }
        assert!(RelayMode::Event.decode(b"[]").is_err());
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let body = br#"{"Records":[{"s3":{"object":{"size":"big"}}}]}"#;
        assert!(matches!(
            RelayMode::Event.decode(body),
            Err(RelayError::Decode(_))
        ));
    }
}
