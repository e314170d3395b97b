//! Property schemas for the core vocabulary.
//!
//! Candidate order is part of each property's contract: decode tries the
//! kinds first to last and the first match is final. That is why, e.g.,
//! `content` lists `String` before `Iri` — a plain string is also a
//! syntactically valid IRI, and declaration order is what keeps the match
//! deterministic.

use crate::schema::{Capability, Kind, PropertySchema};

// Candidate shorthand, to keep the tables tabular.
const OBJ: Kind = Kind::Entity(Capability::Object);
const LNK: Kind = Kind::Entity(Capability::Link);
const IMG: Kind = Kind::Entity(Capability::Image);
const COL: Kind = Kind::Entity(Capability::Collection);
const CPAGE: Kind = Kind::Entity(Capability::CollectionPage);
const IRI: Kind = Kind::Iri;
const STR: Kind = Kind::String;
const LANG: Kind = Kind::LangString;
const FLOAT: Kind = Kind::Float;
const BOOL: Kind = Kind::Boolean;
const DATE: Kind = Kind::DateTime;
const DUR: Kind = Kind::Duration;
const MIME: Kind = Kind::Mime;

const fn functional(name: &'static str, candidates: &'static [Kind]) -> PropertySchema {
    PropertySchema {
        name,
        functional: true,
        lang_map: false,
        candidates,
    }
}

const fn functional_lang(name: &'static str, candidates: &'static [Kind]) -> PropertySchema {
    PropertySchema {
        name,
        functional: true,
        lang_map: true,
        candidates,
    }
}

const fn many(name: &'static str, candidates: &'static [Kind]) -> PropertySchema {
    PropertySchema {
        name,
        functional: false,
        lang_map: false,
        candidates,
    }
}

const fn many_lang(name: &'static str, candidates: &'static [Kind]) -> PropertySchema {
    PropertySchema {
        name,
        functional: false,
        lang_map: true,
        candidates,
    }
}

// ── Object core ─────────────────────────────────────────────────────

pub static ID: PropertySchema = functional("id", &[IRI]);
pub static NAME: PropertySchema = many_lang("name", &[STR, LANG]);
pub static SUMMARY: PropertySchema = many_lang("summary", &[STR, LANG]);
pub static CONTENT: PropertySchema = many_lang("content", &[STR, LANG, IRI]);
pub static ATTACHMENT: PropertySchema = many("attachment", &[OBJ, LNK, IRI]);
pub static ATTRIBUTED_TO: PropertySchema = many("attributedTo", &[OBJ, LNK, IRI]);
pub static AUDIENCE: PropertySchema = many("audience", &[OBJ, LNK, IRI]);
pub static TO: PropertySchema = many("to", &[OBJ, LNK, IRI]);
pub static BTO: PropertySchema = many("bto", &[OBJ, LNK, IRI]);
pub static CC: PropertySchema = many("cc", &[OBJ, LNK, IRI]);
pub static BCC: PropertySchema = many("bcc", &[OBJ, LNK, IRI]);
pub static IN_REPLY_TO: PropertySchema = many("inReplyTo", &[OBJ, LNK, IRI]);
pub static TAG: PropertySchema = many("tag", &[OBJ, LNK, IRI]);
pub static ICON: PropertySchema = many("icon", &[IMG, LNK, IRI]);
pub static IMAGE: PropertySchema = many("image", &[IMG, LNK, IRI]);
pub static LOCATION: PropertySchema = many("location", &[OBJ, LNK, IRI]);
pub static GENERATOR: PropertySchema = many("generator", &[OBJ, LNK, IRI]);
pub static PREVIEW: PropertySchema = many("preview", &[OBJ, LNK, IRI]);
pub static URL: PropertySchema = many("url", &[IRI, LNK]);
pub static REPLIES: PropertySchema = functional("replies", &[COL, IRI]);
pub static PUBLISHED: PropertySchema = functional("published", &[DATE]);
pub static UPDATED: PropertySchema = functional("updated", &[DATE]);
pub static START_TIME: PropertySchema = functional("startTime", &[DATE]);
pub static END_TIME: PropertySchema = functional("endTime", &[DATE]);
pub static DURATION: PropertySchema = functional("duration", &[DUR]);
pub static MEDIA_TYPE: PropertySchema = functional("mediaType", &[MIME]);

// ── Activities ──────────────────────────────────────────────────────

pub static ACTOR: PropertySchema = many("actor", &[OBJ, LNK, IRI]);
pub static OBJECT: PropertySchema = many("object", &[OBJ, IRI]);
pub static TARGET: PropertySchema = many("target", &[OBJ, LNK, IRI]);
pub static RESULT: PropertySchema = many("result", &[OBJ, LNK, IRI]);
pub static ORIGIN: PropertySchema = many("origin", &[OBJ, LNK, IRI]);
pub static INSTRUMENT: PropertySchema = many("instrument", &[OBJ, LNK, IRI]);
pub static ONE_OF: PropertySchema = many("oneOf", &[OBJ, LNK, IRI]);
pub static ANY_OF: PropertySchema = many("anyOf", &[OBJ, LNK, IRI]);
pub static CLOSED: PropertySchema = many("closed", &[OBJ, LNK, DATE, BOOL, IRI]);

// ── Collections ─────────────────────────────────────────────────────

pub static TOTAL_ITEMS: PropertySchema = functional("totalItems", &[FLOAT]);
pub static CURRENT: PropertySchema = functional("current", &[CPAGE, LNK, IRI]);
pub static FIRST: PropertySchema = functional("first", &[CPAGE, LNK, IRI]);
pub static LAST: PropertySchema = functional("last", &[CPAGE, LNK, IRI]);
pub static ITEMS: PropertySchema = many("items", &[OBJ, LNK, IRI]);
pub static ORDERED_ITEMS: PropertySchema = many("orderedItems", &[OBJ, LNK, IRI]);
pub static PART_OF: PropertySchema = functional("partOf", &[LNK, COL, IRI]);
pub static NEXT: PropertySchema = functional("next", &[CPAGE, LNK, IRI]);
pub static PREV: PropertySchema = functional("prev", &[CPAGE, LNK, IRI]);
pub static START_INDEX: PropertySchema = functional("startIndex", &[FLOAT]);

// ── Links ───────────────────────────────────────────────────────────

pub static HREF: PropertySchema = functional("href", &[IRI]);
pub static REL: PropertySchema = many("rel", &[STR]);
pub static HREFLANG: PropertySchema = functional("hreflang", &[STR]);

// ── Actor endpoints ─────────────────────────────────────────────────

pub static PREFERRED_USERNAME: PropertySchema =
    functional_lang("preferredUsername", &[STR, LANG]);
pub static INBOX: PropertySchema = functional("inbox", &[IRI]);
pub static OUTBOX: PropertySchema = functional("outbox", &[IRI]);
pub static FOLLOWING: PropertySchema = functional("following", &[IRI]);
pub static FOLLOWERS: PropertySchema = functional("followers", &[IRI]);
pub static LIKED: PropertySchema = functional("liked", &[IRI]);
