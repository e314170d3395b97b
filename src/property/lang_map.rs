//! Per-language string alternates.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use smol_str::SmolStr;

/// A mapping from BCP-47 language tag to a string value.
///
/// Attached beside (not instead of) a string-valued property as its
/// `<name>Map` sibling. Keys are unique; iteration order is insertion
/// order but carries no meaning, and equality ignores it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NaturalLanguageMap {
    entries: IndexMap<SmolStr, String>,
}

impl NaturalLanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a language tag, replacing any previous value.
    pub fn set(&mut self, language: impl Into<SmolStr>, value: impl Into<String>) {
        self.entries.insert(language.into(), value.into());
    }

    /// The value for a language tag.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries.get(language).map(String::as_str)
    }

    /// Remove a language tag, returning its value.
    pub fn remove(&mut self, language: &str) -> Option<String> {
        self.entries.shift_remove(language)
    }

    /// The language tags currently present.
    pub fn languages(&self) -> Vec<&str> {
        self.entries.keys().map(SmolStr::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(tag, value)| (tag.as_str(), value.as_str()))
    }

    /// Strict candidate decode: matches an object whose values are all
    /// strings and which carries no `type` discriminator. Anything else
    /// returns `None` so the union matcher can fall through.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let object = raw.as_object()?;
        if object.contains_key("type") {
            return None;
        }
        let mut map = Self::new();
        for (tag, value) in object {
            map.set(tag.as_str(), value.as_str()?);
        }
        Some(map)
    }

    /// Lenient sibling-key decode: keeps string members, silently drops
    /// the rest. Used for `<name>Map` document keys, where one malformed
    /// entry must not fail the whole document.
    pub fn from_object_lenient(object: &Map<String, Value>) -> Self {
        let mut map = Self::new();
        for (tag, value) in object {
            if let Some(text) = value.as_str() {
                map.set(tag.as_str(), text);
            }
        }
        map
    }

    /// Serialize to a document value. An empty map emits `{}`.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        for (tag, value) in &self.entries {
            object.insert(tag.to_string(), Value::String(value.clone()));
        }
        Value::Object(object)
    }
}
