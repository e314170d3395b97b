//! # astreams-base
//!
//! Core library for ActivityStreams vocabulary modeling: a typed object
//! model and a codec between vocabulary entities and generic JSON documents.
//!
//! The engine is generic and schema-driven. Each vocabulary term is a data
//! table (`vocab`) naming its capabilities and its properties; each property
//! declares an ordered list of candidate kinds (nested entity, bare IRI,
//! primitive literal, per-language string map). Decode matches document
//! values against the candidates in declared order; encode walks populated
//! slots and preserves unknown properties verbatim.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! vocab     → core vocabulary tables (terms, properties)
//!   ↓
//! codec     → document decode/encode, candidate matching
//!   ↓
//! entity    → Entity: type list, slots, language maps, unknown bag
//!   ↓
//! registry  → type-name resolution, capability checks
//!   ↓
//! property  → union values, ordered lists, language maps, primitives
//!   ↓
//! schema    → Kind, Capability, PropertySchema, TermSchema
//!   ↓
//! base      → foundation value types (Iri, IsoDuration)
//! ```

// ============================================================================
// MODULES (dependency order: base → schema → property → registry → entity →
// codec → vocab)
// ============================================================================

/// Foundation value types: Iri, IsoDuration
pub mod base;

/// Schema tables: candidate kinds, capabilities, property and term schemas
pub mod schema;

/// Property value model: tagged union, primitives, lists, language maps
pub mod property;

/// Type registry: name resolution and capability checks
pub mod registry;

/// Entity: resolved types, property slots, unknown bag
pub mod entity;

/// Document codec: entity ⇄ generic JSON document
pub mod codec;

/// The core vocabulary as data tables
pub mod vocab;

// Re-export the commonly needed surface
pub use base::{Iri, IsoDuration};
pub use codec::{CodecError, DocumentCodec};
pub use entity::Entity;
pub use property::{NaturalLanguageMap, Primitive, PropertyList, PropertyValue};
pub use registry::TypeRegistry;
pub use schema::{Capability, Kind, PropertySchema, TermSchema};
