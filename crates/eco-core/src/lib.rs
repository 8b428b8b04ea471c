//! eco-core: ECO Matrix assistant core (topic catalogs, knowledge table, keyword responder).
//!
//! The responder takes one user message and returns one markdown-formatted answer.
//! Transport adapters (gateway, console) live in add-ons and only call into this crate.

mod catalog;
mod error;
mod knowledge;
mod responder;
mod shared;

// Catalogs
pub use catalog::{ResponseBlock, ResponseCatalog, ResponseRule, Topic, TopicCatalog, TopicKeywords};

// Knowledge table (fallback search)
pub use knowledge::{field_title, KnowledgeCategory, KnowledgeField, KnowledgeTable};

// Responder
pub use responder::{
    normalize, FixedPicker, PhrasePicker, RandomPicker, Responder, SeededPicker, CLEARED_MESSAGE,
    FALLBACK_INTRO, GENERIC_HELP_BLOCK, MAX_FALLBACK_LINES,
};

// Shared
pub use error::CoreError;
pub use shared::{validate_message, CoreConfig, EMPTY_MESSAGE_ERROR, QUICK_QUESTIONS};
