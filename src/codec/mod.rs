//! Entity ⇄ document codec.
//!
//! Documents are generic string-keyed `serde_json` maps; bytes-on-wire
//! parsing and printing stay outside this crate. Decode resolves the
//! `type` discriminator through a [`TypeRegistry`] and matches each
//! property value against its declared candidate kinds in order; encode
//! walks populated slots in schema order and re-emits unknown properties
//! verbatim.
//!
//! ## Decode, per property value
//!
//! ```text
//! object with `type`   → entity candidates × type names, first resolve wins
//! object, no match     → language-map candidate, then bare-deserialize
//!                        fallback, then Unknown (objects never hard-error)
//! scalar               → non-entity candidates in declared order
//! nothing matched      → Unknown if an entity candidate exists,
//!                        else StructuralMismatch
//! ```

mod error;

pub use error::CodecError;

use serde_json::{Map, Value};
use smol_str::SmolStr;

use crate::entity::{Entity, Slot};
use crate::property::{NaturalLanguageMap, Primitive, PropertyList, PropertyValue, primitive};
use crate::registry::TypeRegistry;
use crate::schema::{Kind, PropertySchema, TermSchema};

/// Decoder/encoder over a type registry.
///
/// The codec borrows the registry and holds no other state; it is cheap
/// to copy and safe to share.
#[derive(Clone, Copy, Debug)]
pub struct DocumentCodec<'r> {
    registry: &'r TypeRegistry,
}

/// The declared type name(s) of a document, in document order.
fn type_names(doc: &Map<String, Value>) -> Vec<&str> {
    match doc.get("type") {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

impl<'r> DocumentCodec<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Codec over the shared core-vocabulary registry.
    pub fn core() -> DocumentCodec<'static> {
        DocumentCodec {
            registry: TypeRegistry::core(),
        }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    // ========================================================================
    // DECODE
    // ========================================================================

    /// Decode a top-level document by its own `type` discriminator.
    ///
    /// Names are tried in document order against the registry with no
    /// capability constraint; the first registered name decides the term.
    /// This is the one place an unresolvable discriminator is a hard
    /// error — there is no enclosing property to fall back into.
    pub fn decode(&self, doc: &Map<String, Value>) -> Result<Entity, CodecError> {
        let names = type_names(doc);
        if names.is_empty() {
            return Err(CodecError::MissingType);
        }
        for name in &names {
            if let Some(schema) = self.registry.get(name) {
                return self.decode_as(schema, doc);
            }
        }
        Err(CodecError::UnresolvedType {
            names: names.iter().map(|name| (*name).to_owned()).collect(),
        })
    }

    /// Decode a document against a known term schema.
    ///
    /// Every key is consumed: `@context` is ignored, `type` fills the
    /// type list, `<name>Map` keys fill language maps, declared names
    /// dispatch to candidate matching, and everything else lands in the
    /// unknown bag verbatim.
    pub fn decode_as(
        &self,
        schema: &'static TermSchema,
        doc: &Map<String, Value>,
    ) -> Result<Entity, CodecError> {
        let mut entity = Entity::new(schema);
        for (key, raw) in doc {
            if key == "@context" {
                continue;
            }
            if key == "type" {
                match raw {
                    Value::String(name) => entity.add_type(name.as_str()),
                    Value::Array(items) => {
                        for item in items.iter().filter_map(Value::as_str) {
                            entity.add_type(item);
                        }
                    }
                    _ => {}
                }
                continue;
            }
            if let Some(property) = schema.lang_map_property(key) {
                if let Value::Object(object) = raw {
                    *entity.language_map_mut(property.name)? =
                        NaturalLanguageMap::from_object_lenient(object);
                    continue;
                }
                // a non-object map value is unrecognized structure
                entity.set_unknown(key.clone(), raw.clone());
                continue;
            }
            if let Some(property) = schema.property(key) {
                self.decode_property(&mut entity, property, raw)?;
                continue;
            }
            entity.set_unknown(key.clone(), raw.clone());
        }
        Ok(entity)
    }

    /// Decode one declared property, honoring its multiplicity.
    ///
    /// For non-functional properties an array decodes element-wise in
    /// order; a failure on any element aborts the whole property (and the
    /// entity) — partial lists are not accepted.
    fn decode_property(
        &self,
        entity: &mut Entity,
        property: &'static PropertySchema,
        raw: &Value,
    ) -> Result<(), CodecError> {
        if property.functional {
            let value = self.decode_value(property, raw)?;
            return entity.set(property.name, value);
        }
        let mut list = PropertyList::new();
        match raw {
            Value::Array(items) => {
                for item in items {
                    list.append(self.decode_value(property, item)?);
                }
            }
            single => list.append(self.decode_value(property, single)?),
        }
        *entity.list_mut(property.name)? = list;
        Ok(())
    }

    /// Match one raw value against the property's candidate kinds.
    fn decode_value(
        &self,
        property: &'static PropertySchema,
        raw: &Value,
    ) -> Result<PropertyValue, CodecError> {
        // A property whose only candidate is the bare IRI decodes directly;
        // there is no fallback to soften a malformed reference.
        if property.sole_iri() {
            return primitive::decode_iri(raw)
                .map(PropertyValue::Iri)
                .ok_or_else(|| CodecError::malformed("IRI", raw));
        }
        if let Value::Object(object) = raw {
            return self.decode_object(property, object, raw);
        }
        for kind in property.candidates {
            let matched = match kind {
                // object-shaped kinds never match scalars
                Kind::Entity(_) | Kind::LangString => None,
                Kind::Iri => primitive::decode_iri(raw).map(PropertyValue::Iri),
                Kind::String => {
                    primitive::decode_string(raw).map(|text| Primitive::String(text).into())
                }
                Kind::Float => {
                    primitive::decode_float(raw).map(|number| Primitive::Float(number).into())
                }
                Kind::Boolean => {
                    primitive::decode_boolean(raw).map(|flag| Primitive::Boolean(flag).into())
                }
                Kind::DateTime => primitive::decode_date_time(raw)
                    .map(|stamp| Primitive::DateTime(stamp).into()),
                Kind::Duration => primitive::decode_duration(raw)
                    .map(|duration| Primitive::Duration(duration).into()),
                Kind::Mime => {
                    primitive::decode_mime(raw).map(|text| Primitive::Mime(text).into())
                }
            };
            if let Some(value) = matched {
                return Ok(value);
            }
        }
        if property.accepts_entities() {
            tracing::trace!("property '{}': unmatched scalar kept as unknown", property.name);
            return Ok(PropertyValue::Unknown(raw.clone()));
        }
        Err(CodecError::mismatch(property.name, raw))
    }

    /// Match an object-shaped raw value: entity candidates first (via the
    /// discriminator), then a language-map candidate, then the bare
    /// fallback, then Unknown. Objects never produce a structural error
    /// themselves — only a *matched* entity's nested decode can fail.
    fn decode_object(
        &self,
        property: &'static PropertySchema,
        object: &Map<String, Value>,
        raw: &Value,
    ) -> Result<PropertyValue, CodecError> {
        let names = type_names(object);
        for kind in property.candidates {
            match kind {
                Kind::Entity(capability) => {
                    for name in &names {
                        if let Some(schema) = self.registry.resolve(name, *capability) {
                            // the match is final: a nested decode error
                            // propagates rather than trying further names
                            let entity = self.decode_as(schema, object)?;
                            return Ok(PropertyValue::Entity(entity));
                        }
                    }
                }
                Kind::LangString => {
                    if let Some(map) = NaturalLanguageMap::from_value(raw) {
                        return Ok(Primitive::LangString(map).into());
                    }
                }
                _ => {}
            }
        }
        // No discriminator match: an embedding context may still guarantee
        // the concrete type out-of-band, so try the first entity
        // candidate's default term without requiring `type`. The fallback
        // only claims the object when it bound at least one declared
        // property; arbitrary foreign structure stays Unknown, verbatim.
        if let Some(capability) = property.first_entity_capability() {
            if let Some(schema) = self.registry.bare_schema(capability) {
                if let Ok(entity) = self.decode_as(schema, object) {
                    if entity.has_declared_content() {
                        return Ok(PropertyValue::Entity(entity));
                    }
                }
            }
        }
        tracing::trace!(
            "property '{}': unresolvable object kept as unknown",
            property.name
        );
        Ok(PropertyValue::Unknown(raw.clone()))
    }

    // ========================================================================
    // ENCODE
    // ========================================================================

    /// Encode an entity to a generic document.
    ///
    /// Equivalent to [`Entity::encode`]; present so encode and decode
    /// share one entry point.
    pub fn encode(&self, entity: &Entity) -> Result<Map<String, Value>, CodecError> {
        encode_entity(entity)
    }
}

/// Encode an entity to a generic string-keyed document.
///
/// The unknown bag goes in first, so a structured encode of a recognized
/// property overwrites any same-named unknown leftover. Declared
/// properties emit in schema order; a singleton list collapses to its
/// element, an empty list is omitted. Every present language map emits,
/// even when empty. The `type` key is emitted last: the accumulated names,
/// or the canonical term name when the caller never set any.
pub fn encode_entity(entity: &Entity) -> Result<Map<String, Value>, CodecError> {
    let mut doc = Map::new();

    for (key, value) in entity.unknown_bag() {
        doc.insert(key.clone(), value.clone());
    }

    for property in entity.schema().iter_properties() {
        let Some(slot) = entity.slot(property.name) else {
            continue;
        };
        match slot {
            Slot::One(value) => {
                doc.insert(property.name.to_owned(), value.encode()?);
            }
            Slot::Many(list) => {
                if list.is_empty() {
                    continue;
                }
                let mut encoded = Vec::with_capacity(list.len());
                for item in list.iter() {
                    encoded.push(item.encode()?);
                }
                let value = if encoded.len() == 1 {
                    encoded.remove(0)
                } else {
                    Value::Array(encoded)
                };
                doc.insert(property.name.to_owned(), value);
            }
        }
    }

    for (name, map) in entity.lang_maps() {
        doc.insert(format!("{name}Map"), map.to_value());
    }

    let mut names: Vec<SmolStr> = entity.types().to_vec();
    if names.is_empty() {
        names.push(SmolStr::new(entity.term_name()));
    }
    let type_value = if names.len() == 1 {
        Value::String(names[0].to_string())
    } else {
        Value::Array(
            names
                .iter()
                .map(|name| Value::String(name.to_string()))
                .collect(),
        )
    };
    doc.insert("type".to_owned(), type_value);

    Ok(doc)
}
