//! Company knowledge table used by the fallback search.
//!
//! ## Layout
//!
//! | Category            | Content                                        |
//! |---------------------|------------------------------------------------|
//! | `company_info`      | Name, location, mission, team                  |
//! | `services`          | Consulting and modeling services               |
//! | `platform_features` | SaaS platform capabilities                     |
//! | `contact`           | Email, phone, website                          |
//! | `technical_specs`   | Technology, output formats, industries served  |
//!
//! Categories and fields keep their declaration order; search results follow it.

mod table;

pub use table::{field_title, KnowledgeCategory, KnowledgeField, KnowledgeTable};
