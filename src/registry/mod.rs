//! Type-name resolution against registered vocabulary terms.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::entity::Entity;
use crate::schema::{Capability, TermSchema};
use crate::vocab;

/// Read-mostly mapping from vocabulary type name to its term schema.
///
/// Build the registry (or take [`TypeRegistry::core`]) before any decode;
/// decode never mutates it, so one registry is safe to share across
/// threads and concurrent decode calls. Registration is explicit — there
/// is no import-order-dependent side-effect registration anywhere.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    terms: FxHashMap<&'static str, &'static TermSchema>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the core vocabulary tables.
    pub fn with_core_vocabulary() -> Self {
        let mut registry = Self::new();
        for schema in vocab::TERMS {
            registry.register(schema);
        }
        registry
    }

    /// The shared core-vocabulary registry, built once on first use and
    /// never mutated afterwards.
    pub fn core() -> &'static TypeRegistry {
        static CORE: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::with_core_vocabulary);
        &CORE
    }

    /// Register a term schema. A later registration under the same name
    /// replaces the earlier one.
    pub fn register(&mut self, schema: &'static TermSchema) {
        if self.terms.insert(schema.name, schema).is_some() {
            tracing::debug!("re-registered vocabulary term '{}'", schema.name);
        }
    }

    /// Look up a term schema by type name.
    pub fn get(&self, type_name: &str) -> Option<&'static TermSchema> {
        self.terms.get(type_name).copied()
    }

    /// Resolve `type_name` under a capability constraint: the schema iff
    /// the term is registered and satisfies `wanted`.
    ///
    /// `None` is a failed match, not an error — the caller falls through
    /// to its next candidate kind.
    pub fn resolve(&self, type_name: &str, wanted: Capability) -> Option<&'static TermSchema> {
        match self.get(type_name) {
            Some(schema) if schema.satisfies(wanted) => Some(schema),
            Some(_) => {
                tracing::trace!("type '{type_name}' does not satisfy {wanted}");
                None
            }
            None => {
                tracing::trace!("unregistered type name '{type_name}'");
                None
            }
        }
    }

    /// The default schema for decoding a discriminator-less object in a
    /// capability slot: the capability's own term, when registered.
    pub fn bare_schema(&self, capability: Capability) -> Option<&'static TermSchema> {
        self.get(capability.name())
    }

    /// Construct an empty entity of the named term.
    pub fn new_entity(&self, type_name: &str) -> Option<Entity> {
        self.get(type_name).map(Entity::new)
    }

    /// Number of registered terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_registry_has_the_vocabulary() {
        let registry = TypeRegistry::core();
        assert!(!registry.is_empty());
        for name in ["Object", "Link", "Page", "Note", "OrderedCollection"] {
            assert!(registry.get(name).is_some(), "'{name}' should be registered");
        }
        assert!(registry.get("FutureThing").is_none());
    }

    #[test]
    fn test_resolve_checks_capability() {
        let registry = TypeRegistry::core();
        // Image is an Object and a Document
        assert!(registry.resolve("Image", Capability::Image).is_some());
        assert!(registry.resolve("Image", Capability::Object).is_some());
        // but not a Link
        assert!(registry.resolve("Image", Capability::Link).is_none());
        // unknown names fail quietly
        assert!(registry.resolve("FutureThing", Capability::Object).is_none());
    }

    #[test]
    fn test_resolve_specialization_chain() {
        let registry = TypeRegistry::core();
        let schema = registry
            .resolve("OrderedCollectionPage", Capability::Collection)
            .unwrap();
        assert_eq!(schema.name, "OrderedCollectionPage");
        assert!(
            registry
                .resolve("OrderedCollectionPage", Capability::CollectionPage)
                .is_some()
        );
    }

    #[test]
    fn test_bare_schema_is_the_capability_term() {
        let registry = TypeRegistry::core();
        assert_eq!(registry.bare_schema(Capability::Object).unwrap().name, "Object");
        assert_eq!(registry.bare_schema(Capability::Link).unwrap().name, "Link");
    }

    #[test]
    fn test_new_entity_by_name() {
        let registry = TypeRegistry::core();
        let entity = registry.new_entity("Page").unwrap();
        assert_eq!(entity.term_name(), "Page");
        assert!(registry.new_entity("FutureThing").is_none());
    }

    #[test]
    fn test_explicit_registration() {
        static CUSTOM: TermSchema = TermSchema {
            name: "CustomThing",
            capabilities: &[Capability::Object],
            properties: &[],
        };
        let mut registry = TypeRegistry::with_core_vocabulary();
        let before = registry.len();
        registry.register(&CUSTOM);
        assert_eq!(registry.len(), before + 1);
        assert!(registry.resolve("CustomThing", Capability::Object).is_some());
    }
}
