//! The polymorphic property value.
//!
//! A property slot holds exactly one of: a nested capability-typed entity,
//! a bare IRI, a primitive literal, or an unrecognized payload preserved
//! verbatim. The union is a real enum, so "at most one alternative
//! populated" holds by construction rather than by convention.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::NaturalLanguageMap;
use super::primitive;
use crate::base::{Iri, IsoDuration};
use crate::codec::CodecError;
use crate::entity::Entity;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// A primitive literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    String(String),
    /// A per-language string map used as a literal value.
    LangString(NaturalLanguageMap),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<FixedOffset>),
    Duration(IsoDuration),
    /// A MIME media-type string.
    Mime(String),
}

impl Primitive {
    /// Serialize to a raw document value.
    pub fn encode(&self) -> Result<Value, CodecError> {
        match self {
            Self::String(text) => Ok(primitive::encode_string(text)),
            Self::LangString(map) => Ok(map.to_value()),
            Self::Float(number) => primitive::encode_float(*number)
                .ok_or(CodecError::MalformedPrimitive {
                    kind: "float",
                    value: Value::Null,
                }),
            Self::Boolean(flag) => Ok(primitive::encode_boolean(*flag)),
            Self::DateTime(stamp) => Ok(primitive::encode_date_time(stamp)),
            Self::Duration(duration) => Ok(primitive::encode_duration(duration)),
            Self::Mime(text) => Ok(primitive::encode_mime(text)),
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(stamp) => Some(stamp),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&IsoDuration> {
        match self {
            Self::Duration(duration) => Some(duration),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> Option<&str> {
        match self {
            Self::Mime(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_lang_string(&self) -> Option<&NaturalLanguageMap> {
        match self {
            Self::LangString(map) => Some(map),
            _ => None,
        }
    }
}

// ============================================================================
// THE UNION
// ============================================================================

/// A property value: exactly one alternative, chosen at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A nested entity matched through a capability interface.
    Entity(Entity),
    /// A bare IRI reference.
    Iri(Iri),
    /// A primitive literal.
    Primitive(Primitive),
    /// An unrecognized shape, preserved verbatim for re-encode.
    Unknown(Value),
}

impl PropertyValue {
    /// Serialize via the populated alternative, in fixed priority
    /// (entity → IRI → primitive → unknown). Fails only when a nested
    /// entity's own encode fails, and the failure is propagated.
    pub fn encode(&self) -> Result<Value, CodecError> {
        match self {
            Self::Entity(entity) => Ok(Value::Object(entity.encode()?)),
            Self::Iri(iri) => Ok(primitive::encode_iri(iri)),
            Self::Primitive(literal) => literal.encode(),
            Self::Unknown(raw) => Ok(raw.clone()),
        }
    }

    // ── Constructors ────────────────────────────────────────────────

    /// An IRI value parsed from text; `None` when the text is malformed.
    pub fn iri(value: &str) -> Option<Self> {
        Iri::parse(value).map(Self::Iri)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Primitive(Primitive::String(value.into()))
    }

    pub fn float(value: f64) -> Self {
        Self::Primitive(Primitive::Float(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::Primitive(Primitive::Boolean(value))
    }

    pub fn date_time(value: DateTime<FixedOffset>) -> Self {
        Self::Primitive(Primitive::DateTime(value))
    }

    pub fn duration(value: IsoDuration) -> Self {
        Self::Primitive(Primitive::Duration(value))
    }

    pub fn mime(value: impl Into<String>) -> Self {
        Self::Primitive(Primitive::Mime(value.into()))
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&Value> {
        match self {
            Self::Unknown(raw) => Some(raw),
            _ => None,
        }
    }
}

impl From<Entity> for PropertyValue {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl From<Iri> for PropertyValue {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<Primitive> for PropertyValue {
    fn from(literal: Primitive) -> Self {
        Self::Primitive(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exactly_one_alternative() {
        let value = PropertyValue::string("hi");
        assert!(value.as_primitive().is_some());
        assert!(value.as_iri().is_none());
        assert!(value.as_entity().is_none());
        assert!(value.as_unknown().is_none());
    }

    #[test]
    fn test_encode_priority_arms() {
        assert_eq!(
            PropertyValue::iri("https://example.com/a").unwrap().encode().unwrap(),
            json!("https://example.com/a")
        );
        assert_eq!(PropertyValue::string("hi").encode().unwrap(), json!("hi"));
        assert_eq!(PropertyValue::boolean(true).encode().unwrap(), json!(true));
        let raw = json!({"a": [1, 2]});
        assert_eq!(
            PropertyValue::Unknown(raw.clone()).encode().unwrap(),
            raw
        );
    }

    #[test]
    fn test_encode_rejects_non_finite_float() {
        assert!(PropertyValue::float(f64::INFINITY).encode().is_err());
        assert!(PropertyValue::float(0.5).encode().is_ok());
    }
}
