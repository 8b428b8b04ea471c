//! Canned answer blocks and the fixed order they are emitted in.

use super::Topic;

const GREETINGS: [&str; 3] = [
    "Hello! I'm your ECO Matrix AI Assistant. How can I help you today?",
    "Hi there! Welcome to ECO Matrix. What would you like to know?",
    "Greetings! I'm here to help you with all your energy modeling questions.",
];

const FAREWELLS: [&str; 3] = [
    "Thank you for your interest in ECO Matrix! Feel free to reach out anytime.",
    "Goodbye! Don't hesitate to contact us for your energy modeling needs.",
    "Thanks for chatting! We're here whenever you need energy modeling expertise.",
];

const SERVICES_BLOCK: &str = r#"**ECO Matrix Services:**

🏢 **Core Offering**: Our innovative SaaS application helps Architectural, Engineering, and Construction firms identify building design solutions that maximize energy efficiency while minimizing costs.

🔧 **Key Services**:
- Advanced parametric energy modeling protocols
- Building design optimization and analysis
- Capital and operational cost minimization strategies
- Energy performance benchmarking
- Building code compliance verification
- Detailed building load analysis
- Expert energy modeling consultation

💡 **Value Proposition**: We enable you to compare thousands of design options with detailed analysis, ensuring you get the most cost-effective and energy-efficient solutions for your projects."#;

const PLATFORM_BLOCK: &str = r#"**ECO Matrix Platform Features:**

🎯 **3D Modeling**: Generate project-specific 3D building models tailored to your requirements

⚡ **Energy Simulation**: Perform comprehensive energy simulations for various design combinations

📊 **Comparison Engine**: Compare thousands of design options simultaneously

💰 **Cost Optimization**: Identify solutions that outperform benchmarks in cost-effectiveness

📈 **Performance Analytics**: Detailed reporting and energy benchmarking capabilities

🔗 **Integration**: Seamlessly integrates with existing AEC industry workflows

The platform uses proprietary algorithms to help you make data-driven decisions for optimal building performance."#;

const COMPANY_BLOCK: &str = r#"**About ECO Matrix:**

🏢 **Company**: ECO Matrix is a specialized energy modeling consultancy based in Winnipeg, Canada

🎯 **Mission**: We focus on optimizing building decision metrics and KPIs for the AEC industry through advanced parametric modeling protocols

👥 **Expertise**: Our team consists of expert energy modeling professionals and engineers

🌍 **Industry Focus**: We serve the Architectural, Engineering, and Construction industries

🚀 **Innovation**: We're committed to providing cutting-edge solutions that drive energy efficiency and cost optimization in building design"#;

const CONTACT_BLOCK: &str = r#"**Contact ECO Matrix:**

📧 **Email**: anup@ecomatrix.io
📞 **Phone**: +1 (204) 894 0387
🌐 **Website**: https://ecomatrix.io
📍 **Location**: Winnipeg, Canada

Feel free to reach out for consultations, demos, or any questions about our energy modeling services!"#;

const ENERGY_BLOCK: &str = r#"**Energy Modeling & Optimization:**

🔋 **Energy Efficiency**: Our platform maximizes building energy efficiency through advanced modeling techniques

📐 **Parametric Modeling**: We use sophisticated parametric protocols to analyze multiple design scenarios

⚖️ **Performance Benchmarking**: Compare your building's performance against industry standards and codes

🎛️ **Load Analysis**: Detailed analysis of building energy loads and consumption patterns

📊 **Optimization Reports**: Comprehensive reports showing energy savings potential and cost implications

Our energy modeling approach ensures your buildings meet or exceed efficiency standards while staying within budget."#;

const BENEFITS_BLOCK: &str = r#"**Why Choose ECO Matrix:**

✅ **Cost Savings**: Minimize both capital and operational costs through optimized design

⚡ **Energy Efficiency**: Maximize building performance and energy savings

🎯 **Data-Driven Decisions**: Make informed choices based on comprehensive analysis

⏱️ **Time Efficiency**: Quickly compare thousands of design options

📋 **Compliance Assurance**: Ensure building code compliance from the design phase

🏆 **Competitive Advantage**: Stay ahead with cutting-edge energy modeling technology

💼 **Expert Support**: Access to experienced energy modeling professionals"#;

const PRICING_BLOCK: &str = r#"**Pricing Information:**

For detailed pricing information and subscription options, please contact us directly:

📧 Email: anup@ecomatrix.io
📞 Phone: +1 (204) 894 0387

We offer flexible pricing models tailored to your project needs and company size. Our team will be happy to discuss options that work best for your specific requirements."#;

/// Text emitted for a rule: either one fixed block or one of several phrasings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBlock {
    Fixed(String),
    Variants(Vec<String>),
}

impl ResponseBlock {
    fn fixed(text: &str) -> Self {
        Self::Fixed(text.to_string())
    }

    fn variants(texts: &[&str]) -> Self {
        Self::Variants(texts.iter().map(|t| t.to_string()).collect())
    }

    /// Number of phrasings to choose from (1 for a fixed block).
    pub fn len(&self) -> usize {
        match self {
            Self::Fixed(_) => 1,
            Self::Variants(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fixed(_) => false,
            Self::Variants(v) => v.is_empty(),
        }
    }

    /// Returns the phrasing at `index`; fixed blocks ignore the index.
    pub fn render(&self, index: usize) -> Option<&str> {
        match self {
            Self::Fixed(text) => Some(text.as_str()),
            Self::Variants(v) => v.get(index).map(String::as_str),
        }
    }
}

/// A block and the topics that trigger it. A rule fires at most once per answer.
#[derive(Debug, Clone)]
pub struct ResponseRule {
    pub triggers: Vec<Topic>,
    pub block: ResponseBlock,
}

impl ResponseRule {
    pub fn fires_for(&self, topics: &[Topic]) -> bool {
        self.triggers.iter().any(|t| topics.contains(t))
    }
}

/// Response rules in emission order. Detection order of topics never changes this order.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    rules: Vec<ResponseRule>,
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResponseCatalog {
    pub fn new(rules: Vec<ResponseRule>) -> Self {
        Self { rules }
    }

    /// greeting, services, product/technical, company, contact, energy, benefits, pricing, farewell.
    pub fn builtin() -> Self {
        let rule = |triggers: &[Topic], block: ResponseBlock| ResponseRule {
            triggers: triggers.to_vec(),
            block,
        };
        Self {
            rules: vec![
                rule(&[Topic::Greeting], ResponseBlock::variants(&GREETINGS)),
                rule(&[Topic::Services], ResponseBlock::fixed(SERVICES_BLOCK)),
                rule(
                    &[Topic::Product, Topic::Technical],
                    ResponseBlock::fixed(PLATFORM_BLOCK),
                ),
                rule(&[Topic::Company], ResponseBlock::fixed(COMPANY_BLOCK)),
                rule(&[Topic::Contact], ResponseBlock::fixed(CONTACT_BLOCK)),
                rule(&[Topic::Energy], ResponseBlock::fixed(ENERGY_BLOCK)),
                rule(&[Topic::Benefits], ResponseBlock::fixed(BENEFITS_BLOCK)),
                rule(&[Topic::Pricing], ResponseBlock::fixed(PRICING_BLOCK)),
                rule(&[Topic::Farewell], ResponseBlock::variants(&FAREWELLS)),
            ],
        }
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    /// The block of the first rule triggered by `topic`, if any.
    pub fn block_for(&self, topic: Topic) -> Option<&ResponseBlock> {
        self.rules
            .iter()
            .find(|r| r.triggers.contains(&topic))
            .map(|r| &r.block)
    }
}
