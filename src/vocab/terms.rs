//! Term schemas for the core vocabulary.
//!
//! Each term lists its capability chain and its property groups — the
//! Object core first, then the term's own additions. The groups mirror
//! the vocabulary's specialization layers without repeating the shared
//! tables per term.

use super::properties as p;
use crate::schema::{Capability, PropertySchema, TermSchema};

/// Properties shared by every Object-capable term.
static OBJECT_PROPS: &[&PropertySchema] = &[
    &p::ID,
    &p::NAME,
    &p::SUMMARY,
    &p::CONTENT,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::TO,
    &p::BTO,
    &p::CC,
    &p::BCC,
    &p::IN_REPLY_TO,
    &p::TAG,
    &p::ICON,
    &p::IMAGE,
    &p::LOCATION,
    &p::GENERATOR,
    &p::PREVIEW,
    &p::URL,
    &p::REPLIES,
    &p::PUBLISHED,
    &p::UPDATED,
    &p::START_TIME,
    &p::END_TIME,
    &p::DURATION,
    &p::MEDIA_TYPE,
];

static ACTIVITY_PROPS: &[&PropertySchema] = &[
    &p::ACTOR,
    &p::OBJECT,
    &p::TARGET,
    &p::RESULT,
    &p::ORIGIN,
    &p::INSTRUMENT,
];

/// Intransitive activities drop `object`.
static INTRANSITIVE_PROPS: &[&PropertySchema] =
    &[&p::ACTOR, &p::TARGET, &p::RESULT, &p::ORIGIN, &p::INSTRUMENT];

static QUESTION_PROPS: &[&PropertySchema] = &[&p::ONE_OF, &p::ANY_OF, &p::CLOSED];

static COLLECTION_PROPS: &[&PropertySchema] =
    &[&p::TOTAL_ITEMS, &p::CURRENT, &p::FIRST, &p::LAST, &p::ITEMS];

static ORDERED_COLLECTION_PROPS: &[&PropertySchema] = &[
    &p::TOTAL_ITEMS,
    &p::CURRENT,
    &p::FIRST,
    &p::LAST,
    &p::ORDERED_ITEMS,
];

static PAGE_PROPS: &[&PropertySchema] = &[&p::PART_OF, &p::NEXT, &p::PREV];

static ORDERED_PAGE_PROPS: &[&PropertySchema] =
    &[&p::PART_OF, &p::NEXT, &p::PREV, &p::START_INDEX];

static LINK_PROPS: &[&PropertySchema] = &[
    &p::ID,
    &p::NAME,
    &p::HREF,
    &p::REL,
    &p::MEDIA_TYPE,
    &p::HREFLANG,
    &p::PREVIEW,
];

static ACTOR_PROPS: &[&PropertySchema] = &[
    &p::PREFERRED_USERNAME,
    &p::INBOX,
    &p::OUTBOX,
    &p::FOLLOWING,
    &p::FOLLOWERS,
    &p::LIKED,
];

// ── Terms ───────────────────────────────────────────────────────────

pub static OBJECT: TermSchema = TermSchema {
    name: "Object",
    capabilities: &[Capability::Object],
    properties: &[OBJECT_PROPS],
};

pub static LINK: TermSchema = TermSchema {
    name: "Link",
    capabilities: &[Capability::Link],
    properties: &[LINK_PROPS],
};

pub static MENTION: TermSchema = TermSchema {
    name: "Mention",
    capabilities: &[Capability::Link],
    properties: &[LINK_PROPS],
};

pub static ACTIVITY: TermSchema = TermSchema {
    name: "Activity",
    capabilities: &[Capability::Object, Capability::Activity],
    properties: &[OBJECT_PROPS, ACTIVITY_PROPS],
};

pub static INTRANSITIVE_ACTIVITY: TermSchema = TermSchema {
    name: "IntransitiveActivity",
    capabilities: &[Capability::Object, Capability::Activity],
    properties: &[OBJECT_PROPS, INTRANSITIVE_PROPS],
};

pub static CREATE: TermSchema = TermSchema {
    name: "Create",
    capabilities: &[Capability::Object, Capability::Activity],
    properties: &[OBJECT_PROPS, ACTIVITY_PROPS],
};

pub static FOLLOW: TermSchema = TermSchema {
    name: "Follow",
    capabilities: &[Capability::Object, Capability::Activity],
    properties: &[OBJECT_PROPS, ACTIVITY_PROPS],
};

pub static QUESTION: TermSchema = TermSchema {
    name: "Question",
    capabilities: &[Capability::Object, Capability::Activity],
    properties: &[OBJECT_PROPS, INTRANSITIVE_PROPS, QUESTION_PROPS],
};

pub static COLLECTION: TermSchema = TermSchema {
    name: "Collection",
    capabilities: &[Capability::Object, Capability::Collection],
    properties: &[OBJECT_PROPS, COLLECTION_PROPS],
};

pub static ORDERED_COLLECTION: TermSchema = TermSchema {
    name: "OrderedCollection",
    capabilities: &[
        Capability::Object,
        Capability::Collection,
        Capability::OrderedCollection,
    ],
    properties: &[OBJECT_PROPS, ORDERED_COLLECTION_PROPS],
};

pub static COLLECTION_PAGE: TermSchema = TermSchema {
    name: "CollectionPage",
    capabilities: &[
        Capability::Object,
        Capability::Collection,
        Capability::CollectionPage,
    ],
    properties: &[OBJECT_PROPS, COLLECTION_PROPS, PAGE_PROPS],
};

pub static ORDERED_COLLECTION_PAGE: TermSchema = TermSchema {
    name: "OrderedCollectionPage",
    capabilities: &[
        Capability::Object,
        Capability::Collection,
        Capability::OrderedCollection,
        Capability::CollectionPage,
        Capability::OrderedCollectionPage,
    ],
    properties: &[OBJECT_PROPS, ORDERED_COLLECTION_PROPS, ORDERED_PAGE_PROPS],
};

pub static DOCUMENT: TermSchema = TermSchema {
    name: "Document",
    capabilities: &[Capability::Object, Capability::Document],
    properties: &[OBJECT_PROPS],
};

pub static IMAGE: TermSchema = TermSchema {
    name: "Image",
    capabilities: &[Capability::Object, Capability::Document, Capability::Image],
    properties: &[OBJECT_PROPS],
};

pub static PAGE: TermSchema = TermSchema {
    name: "Page",
    capabilities: &[Capability::Object, Capability::Document],
    properties: &[OBJECT_PROPS],
};

pub static NOTE: TermSchema = TermSchema {
    name: "Note",
    capabilities: &[Capability::Object],
    properties: &[OBJECT_PROPS],
};

pub static ARTICLE: TermSchema = TermSchema {
    name: "Article",
    capabilities: &[Capability::Object],
    properties: &[OBJECT_PROPS],
};

pub static PERSON: TermSchema = TermSchema {
    name: "Person",
    capabilities: &[Capability::Object],
    properties: &[OBJECT_PROPS, ACTOR_PROPS],
};

/// Every core term, in registration order.
pub static TERMS: &[&TermSchema] = &[
    &OBJECT,
    &LINK,
    &MENTION,
    &ACTIVITY,
    &INTRANSITIVE_ACTIVITY,
    &CREATE,
    &FOLLOW,
    &QUESTION,
    &COLLECTION,
    &ORDERED_COLLECTION,
    &COLLECTION_PAGE,
    &ORDERED_COLLECTION_PAGE,
    &DOCUMENT,
    &IMAGE,
    &PAGE,
    &NOTE,
    &ARTICLE,
    &PERSON,
];
