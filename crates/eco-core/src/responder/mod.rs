//! Keyword responder: normalize, classify into topics, render canned blocks.
//!
//! Stateless apart from the injected [`PhrasePicker`]; safe to share behind `Arc`
//! across any number of concurrent callers.

mod phrases;

pub use phrases::{FixedPicker, PhrasePicker, RandomPicker, SeededPicker};

use crate::catalog::{ResponseCatalog, Topic, TopicCatalog};
use crate::knowledge::KnowledgeTable;
use crate::shared::CoreConfig;
use std::sync::Arc;
use tracing::debug;

/// Fallback search keeps at most this many knowledge lines.
pub const MAX_FALLBACK_LINES: usize = 3;

/// Heading placed above fallback search hits.
pub const FALLBACK_INTRO: &str = "Here's what I found relevant to your query:";

/// Reply for a cleared conversation.
pub const CLEARED_MESSAGE: &str =
    "Conversation cleared. Hello! I'm your ECO Matrix AI Assistant. How can I help you today?";

/// Answer when neither a topic block nor the knowledge table has anything.
pub const GENERIC_HELP_BLOCK: &str = r#"I'd be happy to help you with information about ECO Matrix! Here are some topics I can assist with:

🏢 **Company Information** - Learn about ECO Matrix and our mission
🔧 **Services** - Discover our energy modeling and optimization services
💻 **Platform Features** - Explore our SaaS application capabilities
📞 **Contact Details** - Get in touch with our team
⚡ **Energy Modeling** - Understand our technical approach
💰 **Benefits** - See why ECO Matrix is the right choice

Please feel free to ask about any of these topics or anything specific about energy modeling and building optimization!"#;

/// Lowercases, replaces anything that is not a letter, digit or whitespace with a space,
/// and collapses whitespace runs into single spaces (no leading/trailing space).
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classifies messages against the topic catalog and assembles the canned answer.
pub struct Responder {
    topics: Arc<TopicCatalog>,
    responses: Arc<ResponseCatalog>,
    knowledge: Arc<KnowledgeTable>,
    picker: Arc<dyn PhrasePicker>,
}

impl Responder {
    pub fn new(
        topics: Arc<TopicCatalog>,
        responses: Arc<ResponseCatalog>,
        knowledge: Arc<KnowledgeTable>,
        picker: Arc<dyn PhrasePicker>,
    ) -> Self {
        Self {
            topics,
            responses,
            knowledge,
            picker,
        }
    }

    /// Built-in ECO Matrix catalogs with the given phrase picker.
    pub fn builtin(picker: Arc<dyn PhrasePicker>) -> Self {
        Self::new(
            Arc::new(TopicCatalog::builtin()),
            Arc::new(ResponseCatalog::builtin()),
            Arc::new(KnowledgeTable::builtin()),
            picker,
        )
    }

    /// Built-in catalogs; seeded phrasing when `phrase_seed` is configured.
    pub fn from_config(config: &CoreConfig) -> Self {
        let picker: Arc<dyn PhrasePicker> = match config.phrase_seed {
            Some(seed) => Arc::new(SeededPicker::new(seed)),
            None => Arc::new(RandomPicker),
        };
        Self::builtin(picker)
    }

    pub fn topic_catalog(&self) -> &TopicCatalog {
        &self.topics
    }

    pub fn knowledge(&self) -> &KnowledgeTable {
        &self.knowledge
    }

    /// Topics detected in an already-normalized message. Never empty: falls back to
    /// `[Topic::General]`.
    pub fn classify(&self, normalized: &str) -> Vec<Topic> {
        let topics = self.topics.matches(normalized);
        if topics.is_empty() {
            vec![Topic::General]
        } else {
            topics
        }
    }

    /// Builds the answer for a normalized message and its topics.
    ///
    /// Blocks are emitted in response-catalog order. The knowledge search runs when no
    /// block was emitted or when `General` is among the topics, even next to specific ones.
    pub fn respond(&self, normalized: &str, topics: &[Topic]) -> String {
        let mut blocks: Vec<String> = Vec::new();

        for rule in self.responses.rules() {
            if !rule.fires_for(topics) || rule.block.is_empty() {
                continue;
            }
            let count = rule.block.len();
            let index = if count > 1 { self.picker.pick(count) % count } else { 0 };
            if let Some(text) = rule.block.render(index) {
                blocks.push(text.to_string());
            }
        }

        if blocks.is_empty() || topics.contains(&Topic::General) {
            blocks.push(self.fallback_block(normalized));
        }

        blocks.join("\n\n")
    }

    /// normalize -> classify -> respond.
    pub fn generate_response(&self, text: &str) -> String {
        let normalized = normalize(text);
        let topics = self.classify(&normalized);
        debug!(
            target: "eco::responder",
            topics = ?topics,
            "Classified message ({} chars)",
            normalized.len()
        );
        self.respond(&normalized, &topics)
    }

    fn fallback_block(&self, normalized: &str) -> String {
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let mut lines = self.knowledge.search(&tokens);
        lines.truncate(MAX_FALLBACK_LINES);

        if lines.is_empty() {
            GENERIC_HELP_BLOCK.to_string()
        } else {
            format!("{}\n\n{}", FALLBACK_INTRO, lines.join("\n"))
        }
    }
}
