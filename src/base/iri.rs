//! Parsed IRI references.

use std::fmt;

use url::Url;

/// A parsed IRI used as an opaque link to another entity.
///
/// Construction is fallible and never panics: the union matcher treats a
/// malformed reference as a failed candidate and moves on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Iri(Url);

impl Iri {
    /// Parse an IRI from its textual form.
    ///
    /// Returns `None` for anything `url` cannot parse as an absolute URL
    /// (including relative references).
    pub fn parse(input: &str) -> Option<Self> {
        Url::parse(input).ok().map(Self)
    }

    /// The textual form of the IRI.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Access the underlying parsed URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Self(url)
    }
}
