//! Error types for document codec operations.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while decoding or encoding vocabulary documents.
///
/// Decode is all-or-nothing per entity: the first structural error aborts
/// and no partial entity is returned. Unknown top-level properties are
/// never errors; they land in the entity's unknown bag instead.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A document value matched none of the property's declared candidates
    /// and the property has no unknown-shape escape.
    #[error("property '{property}': value {value} matches no declared shape")]
    StructuralMismatch { property: String, value: Value },

    /// A primitive decoder rejected a value where that primitive was
    /// directly required.
    #[error("malformed {kind} value: {value}")]
    MalformedPrimitive { kind: &'static str, value: Value },

    /// A top-level `type` discriminator named no registered term.
    #[error("no registered vocabulary term among {names:?}")]
    UnresolvedType { names: Vec<String> },

    /// A top-level document carried no `type` discriminator.
    #[error("document has no 'type' discriminator")]
    MissingType,

    /// An accessor was called with a property name outside the entity's
    /// schema.
    #[error("'{property}' is not a declared property of {term}")]
    UndeclaredProperty { term: &'static str, property: String },

    /// A functional accessor was used on a non-functional property, or
    /// the other way around.
    #[error("property '{property}' is {expected}")]
    Multiplicity {
        property: &'static str,
        expected: &'static str,
    },
}

impl CodecError {
    /// Create a structural-mismatch error for a property and the value
    /// that failed to match.
    pub fn mismatch(property: &str, value: &Value) -> Self {
        Self::StructuralMismatch {
            property: property.to_owned(),
            value: value.clone(),
        }
    }

    /// Create a malformed-primitive error.
    pub fn malformed(kind: &'static str, value: &Value) -> Self {
        Self::MalformedPrimitive {
            kind,
            value: value.clone(),
        }
    }

    /// Create an undeclared-property error.
    pub fn undeclared(term: &'static str, property: &str) -> Self {
        Self::UndeclaredProperty {
            term,
            property: property.to_owned(),
        }
    }

    /// Create a multiplicity-misuse error.
    pub fn multiplicity(property: &'static str, expected: &'static str) -> Self {
        Self::Multiplicity { property, expected }
    }
}
