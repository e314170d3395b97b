//! Property value model: the tagged union, primitive codecs, ordered
//! lists, and natural-language maps.

mod lang_map;
mod list;
pub mod primitive;
mod value;

pub use lang_map::NaturalLanguageMap;
pub use list::PropertyList;
pub use value::{Primitive, PropertyValue};
