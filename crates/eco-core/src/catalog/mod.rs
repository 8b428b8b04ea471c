//! Static catalogs: which keywords map to which topic, and which text answers each topic.
//!
//! Both catalogs are built once at startup and only read afterwards.

mod responses;
mod topics;

pub use responses::{ResponseBlock, ResponseCatalog, ResponseRule};
pub use topics::{TopicCatalog, TopicKeywords};

use serde::{Deserialize, Serialize};
use std::fmt;

/// User intent category detected from keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Services,
    Product,
    Company,
    Contact,
    Technical,
    Pricing,
    Comparison,
    Benefits,
    Industry,
    Energy,
    Farewell,
    /// Nothing specific matched; answered by the knowledge table search.
    General,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    /// Returns the snake_case label used in logs and the status endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Services => "services",
            Topic::Product => "product",
            Topic::Company => "company",
            Topic::Contact => "contact",
            Topic::Technical => "technical",
            Topic::Pricing => "pricing",
            Topic::Comparison => "comparison",
            Topic::Benefits => "benefits",
            Topic::Industry => "industry",
            Topic::Energy => "energy",
            Topic::Farewell => "farewell",
            Topic::General => "general",
        }
    }
}
