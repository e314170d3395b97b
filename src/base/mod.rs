//! Foundation value types shared across the crate.

mod duration;
mod iri;

pub use duration::IsoDuration;
pub use iri::Iri;
