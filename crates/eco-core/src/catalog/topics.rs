//! Keyword lists per topic.

use super::Topic;

const BUILTIN_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
    ),
    (
        Topic::Services,
        &["service", "offering", "what do you do", "capabilities", "help with"],
    ),
    (
        Topic::Product,
        &["product", "platform", "software", "application", "tool", "saas"],
    ),
    (
        Topic::Company,
        &["company", "about", "who are you", "business", "organization"],
    ),
    (
        Topic::Contact,
        &["contact", "reach", "phone", "email", "address", "location"],
    ),
    (
        Topic::Technical,
        &["how does it work", "technical", "specification", "technology"],
    ),
    (
        Topic::Pricing,
        &["price", "cost", "pricing", "fee", "subscription", "payment"],
    ),
    (
        Topic::Comparison,
        &["vs", "versus", "compare", "difference", "better than"],
    ),
    (
        Topic::Benefits,
        &["benefit", "advantage", "why choose", "value proposition"],
    ),
    (
        Topic::Industry,
        &["construction", "architecture", "engineering", "aec", "building"],
    ),
    (
        Topic::Energy,
        &["energy", "efficiency", "modeling", "simulation", "optimization"],
    ),
    (
        Topic::Farewell,
        &["bye", "goodbye", "thank you", "thanks", "see you"],
    ),
];

/// One topic and the phrases that trigger it.
#[derive(Debug, Clone)]
pub struct TopicKeywords {
    pub topic: Topic,
    pub keywords: Vec<String>,
}

/// Ordered keyword catalog. Order only affects the order topics are reported in.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    entries: Vec<TopicKeywords>,
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TopicCatalog {
    pub fn new(entries: Vec<TopicKeywords>) -> Self {
        Self { entries }
    }

    /// The ECO Matrix keyword lists.
    pub fn builtin() -> Self {
        let entries = BUILTIN_KEYWORDS
            .iter()
            .map(|(topic, keywords)| TopicKeywords {
                topic: *topic,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[TopicKeywords] {
        &self.entries
    }

    /// Topics whose keywords occur as substrings of `normalized`, in catalog order.
    /// Each topic appears at most once. Returns an empty vec when nothing matches.
    pub fn matches(&self, normalized: &str) -> Vec<Topic> {
        self.entries
            .iter()
            .filter(|entry| entry.keywords.iter().any(|k| normalized.contains(k.as_str())))
            .map(|entry| entry.topic)
            .collect()
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.entries.iter().map(|e| e.topic).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_excludes_general() {
        let catalog = TopicCatalog::builtin();
        assert_eq!(catalog.entries().len(), 12);
        assert!(!catalog.topics().contains(&Topic::General));
        assert_eq!(catalog.topics()[0], Topic::Greeting);
        assert_eq!(catalog.topics()[11], Topic::Farewell);
    }

    #[test]
    fn test_matches_substrings_inside_words() {
        let catalog = TopicCatalog::builtin();
        // "this" contains "hi"
        assert_eq!(catalog.matches("this"), vec![Topic::Greeting]);
        // "tools" contains "tool"
        assert_eq!(catalog.matches("tools"), vec![Topic::Product]);
    }

    #[test]
    fn test_matches_each_topic_once_in_catalog_order() {
        let catalog = TopicCatalog::builtin();
        let topics = catalog.matches("thanks bye hello hi price cost");
        assert_eq!(topics, vec![Topic::Greeting, Topic::Pricing, Topic::Farewell]);
    }

    #[test]
    fn test_matches_nothing() {
        let catalog = TopicCatalog::builtin();
        assert!(catalog.matches("").is_empty());
        assert!(catalog.matches("zebra").is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = TopicCatalog::new(vec![TopicKeywords {
            topic: Topic::Pricing,
            keywords: vec!["quote".to_string()],
        }]);
        assert_eq!(catalog.matches("send me a quote"), vec![Topic::Pricing]);
        assert!(catalog.matches("price").is_empty());
    }
}
