//! Primitive codecs between raw document values and typed literals.
//!
//! Each `decode_*` returns `None` on a shape or syntax mismatch so the
//! union matcher can fall through to the next declared candidate; none of
//! them panic. Each pair round-trips: `decode(encode(x)) == x` for every
//! valid `x` (typed equality — the textual form may normalize).

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

use crate::base::{Iri, IsoDuration};

pub fn decode_string(raw: &Value) -> Option<String> {
    raw.as_str().map(str::to_owned)
}

pub fn encode_string(value: &str) -> Value {
    Value::String(value.to_owned())
}

pub fn decode_float(raw: &Value) -> Option<f64> {
    raw.as_f64()
}

/// `None` for non-finite values, which the document algebra cannot carry.
pub fn encode_float(value: f64) -> Option<Value> {
    serde_json::Number::from_f64(value).map(Value::Number)
}

pub fn decode_boolean(raw: &Value) -> Option<bool> {
    raw.as_bool()
}

pub fn encode_boolean(value: bool) -> Value {
    Value::Bool(value)
}

pub fn decode_iri(raw: &Value) -> Option<Iri> {
    Iri::parse(raw.as_str()?)
}

pub fn encode_iri(value: &Iri) -> Value {
    Value::String(value.as_str().to_owned())
}

pub fn decode_date_time(raw: &Value) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.as_str()?).ok()
}

pub fn encode_date_time(value: &DateTime<FixedOffset>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

pub fn decode_duration(raw: &Value) -> Option<IsoDuration> {
    IsoDuration::parse(raw.as_str()?)
}

pub fn encode_duration(value: &IsoDuration) -> Value {
    Value::String(value.to_string())
}

/// Requires a `type/subtype` shape with both halves non-empty.
pub fn decode_mime(raw: &Value) -> Option<String> {
    let text = raw.as_str()?;
    let (kind, subtype) = text.split_once('/')?;
    (!kind.is_empty() && !subtype.is_empty()).then(|| text.to_owned())
}

pub fn encode_mime(value: &str) -> Value {
    Value::String(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_shape() {
        assert_eq!(decode_string(&json!("hi")).as_deref(), Some("hi"));
        assert!(decode_string(&json!(1)).is_none());
        assert!(decode_string(&json!({"a": 1})).is_none());
    }

    #[test]
    fn test_float_shape() {
        assert_eq!(decode_float(&json!(1.5)), Some(1.5));
        assert_eq!(decode_float(&json!(3)), Some(3.0));
        assert!(decode_float(&json!("1.5")).is_none());
        assert!(encode_float(f64::NAN).is_none());
    }

    #[test]
    fn test_iri_rejects_non_strings_and_garbage() {
        assert!(decode_iri(&json!(7)).is_none());
        assert!(decode_iri(&json!("not a uri")).is_none());
        let iri = decode_iri(&json!("https://example.com/a")).unwrap();
        assert_eq!(encode_iri(&iri), json!("https://example.com/a"));
    }

    #[test]
    fn test_date_time_roundtrip() {
        let decoded = decode_date_time(&json!("2026-08-07T10:30:00Z")).unwrap();
        let encoded = encode_date_time(&decoded);
        assert_eq!(decode_date_time(&encoded), Some(decoded));
        assert!(decode_date_time(&json!("yesterday")).is_none());
        assert!(decode_date_time(&json!(true)).is_none());
    }

    #[test]
    fn test_duration_roundtrip() {
        let decoded = decode_duration(&json!("PT5S")).unwrap();
        assert_eq!(encode_duration(&decoded), json!("PT5S"));
        assert!(decode_duration(&json!("5 seconds")).is_none());
    }

    #[test]
    fn test_mime_requires_both_halves() {
        assert_eq!(decode_mime(&json!("text/html")).as_deref(), Some("text/html"));
        assert!(decode_mime(&json!("texthtml")).is_none());
        assert!(decode_mime(&json!("/html")).is_none());
        assert!(decode_mime(&json!("text/")).is_none());
    }
}
