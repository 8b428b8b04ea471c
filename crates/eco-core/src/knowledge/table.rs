//! Two-level category -> field -> value table with substring search.

use serde::{Deserialize, Serialize};

const BUILTIN_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "company_info",
        &[
            ("name", "ECO Matrix"),
            ("location", "Winnipeg, Canada"),
            ("industry", "Energy Modeling Consultancy"),
            (
                "specialization",
                "Architectural, Engineering, and Construction (AEC) industry",
            ),
            (
                "mission",
                "Optimizing building decision metrics and KPIs through advanced parametric modeling",
            ),
            ("founded", "Established energy modeling consultancy"),
            ("team", "Expert energy modeling professionals and engineers"),
        ],
    ),
    (
        "services",
        &[
            ("primary", "SaaS application for building design optimization"),
            ("energy_modeling", "Advanced parametric energy modeling protocols"),
            ("cost_analysis", "Capital and operational cost minimization"),
            ("compliance", "Building code compliance verification"),
            ("benchmarking", "Energy performance benchmarking"),
            ("consulting", "Expert energy modeling consultation"),
            ("design_optimization", "Building design solution identification"),
            ("load_analysis", "Detailed building load analysis"),
        ],
    ),
    (
        "platform_features",
        &[
            ("3d_modeling", "Generate 3D, project-specific building models"),
            (
                "energy_simulation",
                "Perform energy simulations for various design combinations",
            ),
            ("comparison_engine", "Compare thousands of design options"),
            ("cost_optimization", "Identify cost-effective solutions"),
            ("efficiency_analysis", "Maximize energy efficiency analysis"),
            ("reporting", "Detailed performance reports and analytics"),
            ("integration", "Integration with existing AEC workflows"),
        ],
    ),
    (
        "contact",
        &[
            ("email", "anup@ecomatrix.io"),
            ("phone", "+1 (204) 894 0387"),
            ("website", "https://ecomatrix.io"),
        ],
    ),
    (
        "technical_specs",
        &[
            ("technology", "Proprietary SaaS application"),
            ("modeling_type", "Parametric energy modeling"),
            ("output_formats", "3D models, energy reports, cost analysis"),
            ("industries_served", "Architecture, Engineering, Construction"),
            ("compliance_standards", "Building energy codes and standards"),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeField {
    pub key: String,
    pub value: String,
}

impl KnowledgeField {
    /// Case-insensitive substring match against the key name or the value.
    pub fn matches(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.key.to_lowercase().contains(&token) || self.value.to_lowercase().contains(&token)
    }

    /// `**Field Title**: value`
    pub fn display_line(&self) -> String {
        format!("**{}**: {}", field_title(&self.key), self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeCategory {
    pub name: String,
    pub fields: Vec<KnowledgeField>,
}

/// Immutable knowledge table. Built once and shared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeTable {
    categories: Vec<KnowledgeCategory>,
}

impl KnowledgeTable {
    pub fn new(categories: Vec<KnowledgeCategory>) -> Self {
        Self { categories }
    }

    /// The ECO Matrix company facts.
    pub fn builtin() -> Self {
        let categories = BUILTIN_TABLE
            .iter()
            .map(|(name, fields)| KnowledgeCategory {
                name: name.to_string(),
                fields: fields
                    .iter()
                    .map(|(key, value)| KnowledgeField {
                        key: key.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[KnowledgeCategory] {
        &self.categories
    }

    /// Direct lookup of one field value.
    pub fn get(&self, category: &str, key: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.name == category)?
            .fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    /// Every field matching every token, formatted as display lines.
    ///
    /// Iterates tokens first, then categories, then fields, so a field hit by two
    /// tokens shows up twice. Callers decide how many lines to keep.
    pub fn search(&self, tokens: &[&str]) -> Vec<String> {
        let mut lines = Vec::new();
        for token in tokens.iter().filter(|t| !t.is_empty()) {
            for category in &self.categories {
                for field in &category.fields {
                    if field.matches(token) {
                        lines.push(field.display_line());
                    }
                }
            }
        }
        lines
    }
}

/// Turns a snake_case key into a display title: `_` becomes a space and each run of
/// letters is capitalized on its first letter (`3d_modeling` -> `3D Modeling`).
pub fn field_title(key: &str) -> String {
    let mut title = String::with_capacity(key.len());
    let mut prev_letter = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            title.push(c);
            prev_letter = false;
        }
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_title() {
        assert_eq!(field_title("website"), "Website");
        assert_eq!(field_title("cost_analysis"), "Cost Analysis");
        assert_eq!(field_title("3d_modeling"), "3D Modeling");
        assert_eq!(field_title("industries_served"), "Industries Served");
        assert_eq!(field_title(""), "");
    }

    #[test]
    fn test_builtin_lookup() {
        let table = KnowledgeTable::builtin();
        assert_eq!(table.categories().len(), 5);
        assert_eq!(table.get("contact", "website"), Some("https://ecomatrix.io"));
        assert_eq!(table.get("company_info", "location"), Some("Winnipeg, Canada"));
        assert_eq!(table.get("contact", "fax"), None);
        assert_eq!(table.get("missing", "website"), None);
    }

    #[test]
    fn test_search_matches_key_name() {
        let table = KnowledgeTable::builtin();
        let lines = table.search(&["website"]);
        assert_eq!(lines, vec!["**Website**: https://ecomatrix.io".to_string()]);
    }

    #[test]
    fn test_search_matches_value_case_insensitive() {
        let table = KnowledgeTable::builtin();
        let lines = table.search(&["winnipeg"]);
        assert_eq!(lines, vec!["**Location**: Winnipeg, Canada".to_string()]);
    }

    #[test]
    fn test_search_keeps_duplicates_across_tokens() {
        let table = KnowledgeTable::builtin();
        let lines = table.search(&["website", "ecomatrix"]);
        // "ecomatrix" hits email and website values
        assert_eq!(
            lines,
            vec![
                "**Website**: https://ecomatrix.io".to_string(),
                "**Email**: anup@ecomatrix.io".to_string(),
                "**Website**: https://ecomatrix.io".to_string(),
            ]
        );
    }

    #[test]
    fn test_search_follows_table_order() {
        let table = KnowledgeTable::builtin();
        let lines = table.search(&["is"]);
        assert_eq!(lines[0], "**Mission**: Optimizing building decision metrics and KPIs through advanced parametric modeling");
        assert_eq!(lines[1], "**Founded**: Established energy modeling consultancy");
        assert_eq!(lines[2], "**Cost Analysis**: Capital and operational cost minimization");
    }

    #[test]
    fn test_search_no_tokens() {
        let table = KnowledgeTable::builtin();
        assert!(table.search(&[]).is_empty());
        assert!(table.search(&[""]).is_empty());
        assert!(table.search(&["zzz"]).is_empty());
    }
}
