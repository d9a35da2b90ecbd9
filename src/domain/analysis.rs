use serde::{Deserialize, Serialize};

/// A UI capability the analyzer detected on the target site.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Feature {
    pub fn category(&self) -> FeatureCategory {
        FeatureCategory::parse(&self.kind)
    }
}

/// Known feature categories. Anything the analyzer reports outside this
/// set falls back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureCategory {
    Form,
    Navigation,
    Authentication,
    Search,
    Modal,
    Table,
    Api,
    Payment,
    Other,
}

impl FeatureCategory {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "form" => FeatureCategory::Form,
            "navigation" => FeatureCategory::Navigation,
            "authentication" => FeatureCategory::Authentication,
            "search" => FeatureCategory::Search,
            "modal" => FeatureCategory::Modal,
            "table" => FeatureCategory::Table,
            "api" => FeatureCategory::Api,
            "payment" => FeatureCategory::Payment,
            _ => FeatureCategory::Other,
        }
    }

    /// Font Awesome icon name used when listing features.
    pub fn icon(&self) -> &'static str {
        match self {
            FeatureCategory::Form => "fa-clipboard",
            FeatureCategory::Navigation => "fa-compass",
            FeatureCategory::Authentication => "fa-lock",
            FeatureCategory::Search => "fa-search",
            FeatureCategory::Modal => "fa-window-maximize",
            FeatureCategory::Table => "fa-table",
            FeatureCategory::Api => "fa-plug",
            FeatureCategory::Payment => "fa-credit-card",
            FeatureCategory::Other => "fa-cube",
        }
    }
}

/// A generated test script with its title and description, as returned by
/// the analyzer. Never mutated individually; the whole collection is
/// replaced on each new analysis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AiTestCase {
    pub title: String,
    pub description: String,
    pub code: String,
}

/// The outcome of one website analysis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub title: String,
    pub url: String,
    pub features: Vec<Feature>,
    #[serde(rename = "testCases")]
    pub test_cases: Vec<AiTestCase>,
}
