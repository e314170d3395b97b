//! The core vocabulary as data tables.
//!
//! Terms and properties are plain statics; the engine consumes nothing
//! else. Consumers with extension vocabularies define their own
//! [`TermSchema`](crate::schema::TermSchema) statics and register them
//! explicitly.

pub mod properties;
pub mod terms;

pub use terms::TERMS;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Capability, Kind};
    use std::collections::HashSet;

    #[test]
    fn test_term_names_unique() {
        let mut seen = HashSet::new();
        for term in TERMS {
            assert!(seen.insert(term.name), "duplicate term '{}'", term.name);
        }
    }

    #[test]
    fn test_property_names_unique_per_term() {
        for term in TERMS {
            let mut seen = HashSet::new();
            for property in term.iter_properties() {
                assert!(
                    seen.insert(property.name),
                    "term '{}' declares '{}' twice",
                    term.name,
                    property.name
                );
            }
        }
    }

    #[test]
    fn test_lang_mappable_properties_accept_strings() {
        for term in TERMS {
            for property in term.iter_properties().filter(|p| p.lang_map) {
                assert!(
                    property.candidates.contains(&Kind::String),
                    "'{}' is language-mappable but not string-valued",
                    property.name
                );
            }
        }
    }

    #[test]
    fn test_every_capability_has_a_default_term() {
        for capability in [
            Capability::Object,
            Capability::Link,
            Capability::Activity,
            Capability::Collection,
            Capability::OrderedCollection,
            Capability::CollectionPage,
            Capability::OrderedCollectionPage,
            Capability::Document,
            Capability::Image,
        ] {
            let term = TERMS.iter().find(|t| t.name == capability.name());
            assert!(
                term.is_some_and(|t| t.satisfies(capability)),
                "capability {capability} has no registered default term"
            );
        }
    }

    #[test]
    fn test_every_term_declares_id() {
        for term in TERMS {
            let id = term.property("id").expect("every term declares id");
            assert!(id.sole_iri());
            assert!(id.functional);
        }
    }
}
