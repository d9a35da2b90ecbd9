use serde::{Deserialize, Serialize};

/// Per-test outcome reported by the runner. The service is the source of
/// truth on status strings; anything other than `"pass"` counts as failing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TestResult {
    pub status: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default, rename = "duration")]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        self.status == "pass"
    }
}

/// Ordered outcomes for one run request, index-aligned with the submitted
/// codes. Replaced wholesale by each new run.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ExecutionBatch {
    pub results: Vec<TestResult>,
}

impl ExecutionBatch {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pass_status_counts_as_passed() {
        let pass = TestResult {
            status: "pass".to_string(),
            output: None,
            duration_ms: None,
            error: None,
        };
        let fail = TestResult {
            status: "fail".to_string(),
            ..pass.clone()
        };
        let skipped = TestResult {
            status: "skipped".to_string(),
            ..pass.clone()
        };
        assert!(pass.passed());
        assert!(!fail.passed());
        assert!(!skipped.passed());
    }

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let result: TestResult = serde_json::from_str(r#"{"status":"pass"}"#).unwrap();
        assert_eq!(result.output, None);
        assert_eq!(result.duration_ms, None);
        assert_eq!(result.error, None);
    }
}
