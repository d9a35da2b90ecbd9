use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TestType {
    Functional,
    Security,
    Performance,
    #[serde(rename = "UI/UX")]
    UiUx,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Functional => "Functional",
            TestType::Security => "Security",
            TestType::Performance => "Performance",
            TestType::UiUx => "UI/UX",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TestPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl TestPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestPriority::Critical => "Critical",
            TestPriority::High => "High",
            TestPriority::Medium => "Medium",
            TestPriority::Low => "Low",
        }
    }
}

impl fmt::Display for TestPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-authored test case. Created through the store, deleted by id,
/// never edited in place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CustomTestCase {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub test_type: TestType,
    pub priority: TestPriority,
    pub steps: String,
    pub code: String,
}

/// Input fields for a new custom test case; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCustomCase {
    pub name: String,
    pub test_type: TestType,
    pub priority: TestPriority,
    pub steps: String,
    pub code: String,
}
