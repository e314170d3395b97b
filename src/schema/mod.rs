//! Schema tables: the per-term data the generic engine consumes.
//!
//! A vocabulary term is described entirely by data: the capabilities it
//! satisfies and the properties it declares. A property in turn declares
//! its multiplicity, whether a `<name>Map` language sibling exists, and an
//! ordered list of candidate kinds. The codec never special-cases a term;
//! everything it needs is in these tables.

use std::fmt;

// ============================================================================
// CAPABILITIES
// ============================================================================

/// A capability interface a vocabulary term may satisfy.
///
/// Capabilities scope which type-name matches are acceptable in a given
/// property slot ("must be an Object", "must be a Link", …). A term
/// satisfies its whole specialization chain, e.g. `OrderedCollectionPage`
/// satisfies every capability below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Object,
    Link,
    Activity,
    Collection,
    OrderedCollection,
    CollectionPage,
    OrderedCollectionPage,
    Document,
    Image,
}

impl Capability {
    /// The capability's name. This doubles as its default term name for
    /// discriminator-less decode (the Object capability falls back to the
    /// `Object` term, and so on).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Link => "Link",
            Self::Activity => "Activity",
            Self::Collection => "Collection",
            Self::OrderedCollection => "OrderedCollection",
            Self::CollectionPage => "CollectionPage",
            Self::OrderedCollectionPage => "OrderedCollectionPage",
            Self::Document => "Document",
            Self::Image => "Image",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CANDIDATE KINDS
// ============================================================================

/// A candidate kind a property slot may hold.
///
/// Declaration order in a property's candidate list is part of the
/// contract: decode tries the kinds first to last and the first match is
/// final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A nested entity restricted to a capability interface.
    Entity(Capability),
    /// A bare IRI reference.
    Iri,
    /// A plain string literal.
    String,
    /// A per-language string map used as a literal value.
    LangString,
    /// A floating-point number.
    Float,
    /// A boolean.
    Boolean,
    /// An RFC 3339 date-time.
    DateTime,
    /// An ISO-8601 duration.
    Duration,
    /// A MIME media-type string.
    Mime,
}

impl Kind {
    /// True for entity-capability candidates.
    pub fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(_))
    }
}

// ============================================================================
// PROPERTY SCHEMA
// ============================================================================

/// Schema for one declared property.
#[derive(Debug)]
pub struct PropertySchema {
    /// The document key.
    pub name: &'static str,
    /// Functional properties hold at most one value; non-functional
    /// properties hold an ordered list.
    pub functional: bool,
    /// Whether a `<name>Map` language-map sibling exists.
    pub lang_map: bool,
    /// Candidate kinds, tried in declared order during decode.
    pub candidates: &'static [Kind],
}

impl PropertySchema {
    /// True when at least one candidate is an entity capability.
    pub fn accepts_entities(&self) -> bool {
        self.candidates.iter().any(Kind::is_entity)
    }

    /// The first entity candidate's capability, used by the bare
    /// (discriminator-less) deserialize fallback.
    pub fn first_entity_capability(&self) -> Option<Capability> {
        self.candidates.iter().find_map(|kind| match kind {
            Kind::Entity(capability) => Some(*capability),
            _ => None,
        })
    }

    /// True when the bare IRI is the property's only candidate; such
    /// properties decode directly through the IRI codec with no fallback.
    pub fn sole_iri(&self) -> bool {
        matches!(self.candidates, [Kind::Iri])
    }
}

// ============================================================================
// TERM SCHEMA
// ============================================================================

/// Schema for one vocabulary term.
#[derive(Debug)]
pub struct TermSchema {
    /// The type-name string carried in the `type` discriminator.
    pub name: &'static str,
    /// Every capability this term satisfies.
    pub capabilities: &'static [Capability],
    /// Property groups, typically one per specialization layer (the Object
    /// core first, then the term's own additions).
    pub properties: &'static [&'static [&'static PropertySchema]],
}

impl TermSchema {
    /// True when this term satisfies `capability`.
    pub fn satisfies(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// All declared properties, groups flattened in declaration order.
    pub fn iter_properties(&self) -> impl Iterator<Item = &'static PropertySchema> + '_ {
        self.properties.iter().flat_map(|group| group.iter().copied())
    }

    /// Look up a declared property by document key.
    pub fn property(&self, name: &str) -> Option<&'static PropertySchema> {
        self.iter_properties().find(|property| property.name == name)
    }

    /// For a `<base>Map` document key, the language-mappable base
    /// property, if declared.
    pub fn lang_map_property(&self, key: &str) -> Option<&'static PropertySchema> {
        let base = key.strip_suffix("Map")?;
        self.property(base).filter(|property| property.lang_map)
    }
}
