//! The vocabulary entity: resolved types, property slots, language maps,
//! and the unknown bag.
//!
//! Accessors are generic and schema-checked — one `set`/`get` pair for
//! functional properties and one list surface for non-functional ones,
//! keyed by declared property name. Misuse (an undeclared name, or the
//! wrong multiplicity) is an error, not silent corruption.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use smol_str::SmolStr;

use crate::base::Iri;
use crate::codec::{self, CodecError};
use crate::property::{NaturalLanguageMap, PropertyList, PropertyValue};
use crate::schema::{PropertySchema, TermSchema};

/// Storage for one declared property, shaped by its multiplicity.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Slot {
    One(PropertyValue),
    Many(PropertyList),
}

/// An instance of a vocabulary term.
///
/// Constructed empty (directly or via
/// [`TypeRegistry::new_entity`](crate::registry::TypeRegistry::new_entity)),
/// populated through the accessors, consumed by [`encode`](Self::encode).
/// Decoded entities are built fresh per decode call.
#[derive(Clone, Debug)]
pub struct Entity {
    schema: &'static TermSchema,
    /// Resolved type names in document order.
    types: Vec<SmolStr>,
    /// Declared-property storage, keyed by schema name.
    slots: IndexMap<&'static str, Slot>,
    /// Language maps for language-mappable properties.
    lang_maps: IndexMap<&'static str, NaturalLanguageMap>,
    /// Unrecognized document keys, preserved verbatim across decode→encode.
    unknown: IndexMap<String, Value>,
}

impl Entity {
    /// Create an empty entity of the given term.
    pub fn new(schema: &'static TermSchema) -> Self {
        Self {
            schema,
            types: Vec::new(),
            slots: IndexMap::new(),
            lang_maps: IndexMap::new(),
            unknown: IndexMap::new(),
        }
    }

    pub fn schema(&self) -> &'static TermSchema {
        self.schema
    }

    /// The canonical term name this entity was constructed as.
    pub fn term_name(&self) -> &'static str {
        self.schema.name
    }

    fn declared(&self, name: &str) -> Result<&'static PropertySchema, CodecError> {
        self.schema
            .property(name)
            .ok_or_else(|| CodecError::undeclared(self.schema.name, name))
    }

    // ── Types ───────────────────────────────────────────────────────

    /// The accumulated type names, in document order.
    pub fn types(&self) -> &[SmolStr] {
        &self.types
    }

    /// Append a type name unless already present.
    pub fn add_type(&mut self, name: impl Into<SmolStr>) {
        let name = name.into();
        if !self.types.contains(&name) {
            self.types.push(name);
        }
    }

    // ── Functional properties ───────────────────────────────────────

    /// The value of a functional property, if populated.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        match self.slots.get(name)? {
            Slot::One(value) => Some(value),
            Slot::Many(_) => None,
        }
    }

    /// Set a functional property, replacing any previous value.
    pub fn set(&mut self, name: &str, value: PropertyValue) -> Result<(), CodecError> {
        let property = self.declared(name)?;
        if !property.functional {
            return Err(CodecError::multiplicity(
                property.name,
                "non-functional; use the list accessors",
            ));
        }
        self.slots.insert(property.name, Slot::One(value));
        Ok(())
    }

    /// Remove a property's stored value (either multiplicity).
    pub fn clear(&mut self, name: &str) {
        self.slots.shift_remove(name);
    }

    /// The entity's `id`, when set and IRI-valued.
    pub fn id(&self) -> Option<&Iri> {
        self.get("id")?.as_iri()
    }

    // ── Non-functional properties ───────────────────────────────────

    /// The ordered list of a non-functional property, if populated.
    pub fn list(&self, name: &str) -> Option<&PropertyList> {
        match self.slots.get(name)? {
            Slot::Many(list) => Some(list),
            Slot::One(_) => None,
        }
    }

    /// Mutable access to a non-functional property's list, creating an
    /// empty list on first use.
    pub fn list_mut(&mut self, name: &str) -> Result<&mut PropertyList, CodecError> {
        let property = self.declared(name)?;
        if property.functional {
            return Err(CodecError::multiplicity(property.name, "functional; use set"));
        }
        let slot = self
            .slots
            .entry(property.name)
            .or_insert_with(|| Slot::Many(PropertyList::new()));
        match slot {
            Slot::Many(list) => Ok(list),
            // set() refuses non-functional names, so a One here is impossible
            Slot::One(_) => unreachable!("functional slot under non-functional property"),
        }
    }

    /// Append to a non-functional property.
    pub fn append(&mut self, name: &str, value: PropertyValue) -> Result<(), CodecError> {
        self.list_mut(name)?.append(value);
        Ok(())
    }

    /// Prepend to a non-functional property.
    pub fn prepend(&mut self, name: &str, value: PropertyValue) -> Result<(), CodecError> {
        self.list_mut(name)?.prepend(value);
        Ok(())
    }

    // ── Language maps ───────────────────────────────────────────────

    /// The language map attached to a property, if present.
    pub fn language_map(&self, name: &str) -> Option<&NaturalLanguageMap> {
        self.lang_maps.get(name)
    }

    /// Mutable access to a property's language map, creating an empty map
    /// on first use. A created map serializes (as an empty object) even if
    /// it is never filled.
    pub fn language_map_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut NaturalLanguageMap, CodecError> {
        let property = self.declared(name)?;
        if !property.lang_map {
            return Err(CodecError::multiplicity(
                property.name,
                "not language-mappable",
            ));
        }
        Ok(self.lang_maps.entry(property.name).or_default())
    }

    /// Set one language alternate on a property's map.
    pub fn set_language(
        &mut self,
        name: &str,
        language: impl Into<SmolStr>,
        text: impl Into<String>,
    ) -> Result<(), CodecError> {
        self.language_map_mut(name)?.set(language, text);
        Ok(())
    }

    /// The language tags present on a property's map (empty when absent).
    pub fn languages(&self, name: &str) -> Vec<&str> {
        self.lang_maps
            .get(name)
            .map(NaturalLanguageMap::languages)
            .unwrap_or_default()
    }

    // ── Unknown bag ─────────────────────────────────────────────────

    /// A preserved unrecognized property, by document key.
    pub fn unknown(&self, key: &str) -> Option<&Value> {
        self.unknown.get(key)
    }

    /// The preserved unrecognized keys, in arrival order.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    /// Store a raw value under an unrecognized key. If the key is later
    /// recognized by the schema, the structured encode overwrites it.
    pub fn set_unknown(&mut self, key: impl Into<String>, value: Value) {
        self.unknown.insert(key.into(), value);
    }

    // ── Encode ──────────────────────────────────────────────────────

    /// Encode to a generic string-keyed document.
    pub fn encode(&self) -> Result<Map<String, Value>, CodecError> {
        codec::encode_entity(self)
    }

    // ── Codec internals ─────────────────────────────────────────────

    pub(crate) fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// True when decode bound at least one declared property or language
    /// map. The bare-deserialize fallback uses this to tell a plausible
    /// discriminator-less entity apart from arbitrary foreign structure.
    pub(crate) fn has_declared_content(&self) -> bool {
        !self.slots.is_empty() || !self.lang_maps.is_empty()
    }

    pub(crate) fn lang_maps(&self) -> impl Iterator<Item = (&'static str, &NaturalLanguageMap)> {
        self.lang_maps.iter().map(|(name, map)| (*name, map))
    }

    pub(crate) fn unknown_bag(&self) -> &IndexMap<String, Value> {
        &self.unknown
    }
}

/// A populated slot, where an empty list counts as absent (the
/// empty-vs-absent collection equivalence used by the round-trip law).
fn is_live(slot: &Slot) -> bool {
    !matches!(slot, Slot::Many(list) if list.is_empty())
}

/// The resolved type names, falling back to the canonical term name when
/// none were set — the same view encode serializes, so the round-trip law
/// can compare a never-typed entity with its decoded counterpart.
fn effective_types(entity: &Entity) -> Vec<&str> {
    if entity.types.is_empty() {
        vec![entity.schema.name]
    } else {
        entity.types.iter().map(SmolStr::as_str).collect()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        if self.schema.name != other.schema.name
            || effective_types(self) != effective_types(other)
            || self.lang_maps != other.lang_maps
            || self.unknown != other.unknown
        {
            return false;
        }
        let live_count =
            |entity: &Entity| entity.slots.values().filter(|slot| is_live(slot)).count();
        live_count(self) == live_count(other)
            && self
                .slots
                .iter()
                .filter(|(_, slot)| is_live(slot))
                .all(|(name, slot)| {
                    other.slots.get(*name).filter(|found| is_live(found)) == Some(slot)
                })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::terms;

    #[test]
    fn test_set_requires_declared_name() {
        let mut entity = Entity::new(&terms::NOTE);
        let err = entity.set("frobnicate", PropertyValue::string("x")).unwrap_err();
        assert!(matches!(err, CodecError::UndeclaredProperty { .. }));
    }

    #[test]
    fn test_set_requires_functional() {
        let mut entity = Entity::new(&terms::NOTE);
        // attachment is non-functional
        let err = entity.set("attachment", PropertyValue::string("x")).unwrap_err();
        assert!(matches!(err, CodecError::Multiplicity { .. }));
        // and the list accessors refuse functional properties
        let err = entity.append("published", PropertyValue::string("x")).unwrap_err();
        assert!(matches!(err, CodecError::Multiplicity { .. }));
    }

    #[test]
    fn test_functional_set_replaces() {
        let mut entity = Entity::new(&terms::NOTE);
        entity
            .set("mediaType", PropertyValue::mime("text/plain"))
            .unwrap();
        entity
            .set("mediaType", PropertyValue::mime("text/html"))
            .unwrap();
        let mime = entity.get("mediaType").unwrap().as_primitive().unwrap();
        assert_eq!(mime.as_mime(), Some("text/html"));
    }

    #[test]
    fn test_language_map_requires_mappable_property() {
        let mut entity = Entity::new(&terms::NOTE);
        entity.set_language("name", "en", "Hi").unwrap();
        assert_eq!(entity.languages("name"), vec!["en"]);
        assert!(entity.set_language("published", "en", "x").is_err());
    }

    #[test]
    fn test_add_type_dedupes() {
        let mut entity = Entity::new(&terms::NOTE);
        entity.add_type("Note");
        entity.add_type("Note");
        assert_eq!(entity.types().len(), 1);
    }

    #[test]
    fn test_equality_ignores_empty_lists() {
        let mut populated_then_drained = Entity::new(&terms::NOTE);
        populated_then_drained
            .append("attachment", PropertyValue::string("x"))
            .unwrap();
        populated_then_drained.list_mut("attachment").unwrap().remove_at(0);

        let untouched = Entity::new(&terms::NOTE);
        assert_eq!(populated_then_drained, untouched);
    }
}
