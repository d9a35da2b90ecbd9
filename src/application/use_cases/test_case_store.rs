use crate::domain::analysis::{AiTestCase, AnalysisResult, Feature};
use crate::domain::test_case::{CustomTestCase, NewCustomCase};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub features: usize,
    pub ai_tests: usize,
    pub custom_tests: usize,
}

/// Session-scoped holder for the current analysis and the user-authored
/// test cases. The AI collection is always exactly the `test_cases` of the
/// most recently accepted analysis; only the custom collection mutates.
#[derive(Debug, Default)]
pub struct TestCaseStore {
    analysis: Option<AnalysisResult>,
    custom: Vec<CustomTestCase>,
}

impl TestCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held analysis wholesale. Custom cases are untouched.
    pub fn set_analysis(&mut self, result: AnalysisResult) {
        info!(
            url = %result.url,
            features = result.features.len(),
            ai_tests = result.test_cases.len(),
            "Analysis accepted"
        );
        self.analysis = Some(result);
    }

    pub fn clear_analysis(&mut self) {
        self.analysis = None;
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn features(&self) -> &[Feature] {
        self.analysis
            .as_ref()
            .map(|a| a.features.as_slice())
            .unwrap_or(&[])
    }

    pub fn ai_tests(&self) -> &[AiTestCase] {
        self.analysis
            .as_ref()
            .map(|a| a.test_cases.as_slice())
            .unwrap_or(&[])
    }

    pub fn custom_tests(&self) -> &[CustomTestCase] {
        &self.custom
    }

    /// Appends a new custom case with a creation-timestamp id and returns
    /// it. Insertion order is preserved for display.
    pub fn add_custom(&mut self, fields: NewCustomCase) -> CustomTestCase {
        let case = CustomTestCase {
            id: self.next_id(),
            name: fields.name,
            test_type: fields.test_type,
            priority: fields.priority,
            steps: fields.steps,
            code: fields.code,
        };
        self.custom.push(case.clone());
        case
    }

    /// Removes the case with the given id. Unknown ids are a no-op.
    pub fn remove_custom(&mut self, id: i64) {
        self.custom.retain(|case| case.id != id);
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            features: self.features().len(),
            ai_tests: self.ai_tests().len(),
            custom_tests: self.custom.len(),
        }
    }

    // Millisecond timestamps are unique enough across user actions, but
    // successive adds within the same tick must not collide.
    fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match self.custom.iter().map(|case| case.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }
}
