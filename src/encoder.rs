//! Wire document encoding
//!
//! A notification travels as one compact JSON object of string values:
//! `source`, `title`, `message`, `level` and, when present, `tag`. Keys are
//! emitted in that order.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::notification::{Level, Notification};

/// Borrowed view of a notification in wire layout
#[derive(Serialize)]
struct WireDocument<'a> {
    source: &'a str,
    title: &'a str,
    message: &'a str,
    level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
}

/// A wire document as a receiver sees it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireMessage {
    pub source: String,
    pub title: String,
    pub message: String,
    pub level: Level,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Serialize a notification into its payload bytes
pub fn encode(notification: &Notification) -> AppResult<Vec<u8>> {
    let document = WireDocument {
        source: notification.source(),
        title: notification.title(),
        message: notification.message(),
        level: notification.level(),
        tag: notification.tag(),
    };

    to_payload(&document)
}

// Any failure here is on the encoding side, whatever serde_json classifies it as
fn to_payload<T: Serialize>(document: &T) -> AppResult<Vec<u8>> {
    serde_json::to_vec(document).map_err(|e| AppError::JsonSerialization {
        context: format!("encoding notification: {}", e),
        source: Some(Box::new(e)),
    })
}

/// Parse a payload the way a receiving server would
pub fn decode(payload: &[u8]) -> AppResult<WireMessage> {
    Ok(serde_json::from_slice(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{validate, NotificationDraft};
    use serde_json::Value;

    fn notification(tag: Option<&str>) -> Notification {
        validate(NotificationDraft {
            host: Some("localhost".to_string()),
            source: "bash".to_string(),
            level: "critical".to_string(),
            title: "Deploy".to_string(),
            message: Some("hi".to_string()),
            tag: tag.map(str::to_string),
            ..Default::default()
        })
        .unwrap()
    }

    fn keys(payload: &[u8]) -> Vec<String> {
        match serde_json::from_slice::<Value>(payload).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_without_tag_has_four_keys() {
        let payload = encode(&notification(None)).unwrap();

        let mut found = keys(&payload);
        found.sort();
        assert_eq!(found, ["level", "message", "source", "title"]);
    }

    #[test]
    fn test_with_tag_has_five_keys() {
        let payload = encode(&notification(Some("ci"))).unwrap();

        let mut found = keys(&payload);
        found.sort();
        assert_eq!(found, ["level", "message", "source", "tag", "title"]);
    }

    #[test]
    fn test_output_is_compact_and_stable() {
        let payload = encode(&notification(Some("ci"))).unwrap();

        assert_eq!(
            String::from_utf8(payload).unwrap(),
            r#"{"source":"bash","title":"Deploy","message":"hi","level":"critical","tag":"ci"}"#
        );
    }

    #[test]
    fn test_receiver_sees_same_fields() {
        let original = notification(Some("ci"));
        let received = decode(&encode(&original).unwrap()).unwrap();

        assert_eq!(received.source, original.source());
        assert_eq!(received.title, original.title());
        assert_eq!(received.message, original.message());
        assert_eq!(received.level, original.level());
        assert_eq!(received.tag.as_deref(), original.tag());
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let n = validate(NotificationDraft {
            host: Some("localhost".to_string()),
            message: Some("line one\nline \"two\"".to_string()),
            ..Default::default()
        })
        .unwrap();

        let received = decode(&encode(&n).unwrap()).unwrap();
        assert_eq!(received.message, "line one\nline \"two\"");
    }

    #[test]
    fn test_serializer_failure_is_an_encoding_error() {
        struct Unencodable;

        impl Serialize for Unencodable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("value cannot be encoded"))
            }
        }

        let err = to_payload(&Unencodable).unwrap_err();
        assert!(matches!(err, AppError::JsonSerialization { .. }), "{err:?}");
        assert_eq!(err.category(), "encoding");
        assert_eq!(err.exit_code(), 70);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode(b"not json").is_err());
        assert!(decode(br#"{"source":"x","title":"","message":"m","level":"urgent"}"#).is_err());
    }
}
