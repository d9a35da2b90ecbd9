use crate::application::use_cases::test_case_store::TestCaseStore;
use crate::application::use_cases::validation::{require_token, validate_code_set};
use crate::domain::error::{AppError, Result};
use crate::domain::execution::ExecutionBatch;
use crate::infrastructure::api_clients::TestRunnerApi;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Which slice of the store a run submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSelection {
    All,
    AiOnly,
    CustomOnly,
}

/// Builds the ordered code sequence for a selection: AI codes in analysis
/// order, then custom codes in insertion order.
pub fn select_codes(selection: RunSelection, store: &TestCaseStore) -> Result<Vec<String>> {
    let ai = store.ai_tests().iter().map(|t| t.code.clone());
    let custom = store.custom_tests().iter().map(|t| t.code.clone());

    match selection {
        RunSelection::All => Ok(ai.chain(custom).collect()),
        RunSelection::AiOnly => Ok(ai.collect()),
        RunSelection::CustomOnly => {
            if store.custom_tests().is_empty() {
                return Err(AppError::NoCustomTests);
            }
            Ok(custom.collect())
        }
    }
}

/// Orchestrates test runs and owns the most recent batch. The previous
/// batch survives a failed run untouched.
pub struct RunTestsUseCase {
    runner: Arc<dyn TestRunnerApi + Send + Sync>,
    last_batch: Mutex<Option<ExecutionBatch>>,
}

impl RunTestsUseCase {
    pub fn new(runner: Arc<dyn TestRunnerApi + Send + Sync>) -> Self {
        Self {
            runner,
            last_batch: Mutex::new(None),
        }
    }

    /// Runs the selected codes against `target_url`. The URL is taken
    /// verbatim from the input field and not re-validated; it may differ
    /// from the URL the analysis was made for.
    pub async fn run(
        &self,
        selection: RunSelection,
        store: &TestCaseStore,
        target_url: &str,
        auth_token: Option<&str>,
    ) -> Result<ExecutionBatch> {
        let codes = select_codes(selection, store)?;
        validate_code_set(&codes)?;
        let token = require_token(auth_token)?;

        info!(count = codes.len(), url = target_url, "Running tests");
        match self.runner.run_tests(&codes, target_url, token).await {
            Ok(batch) => {
                info!(results = batch.len(), "Run complete");
                *self.last_batch.lock().unwrap() = Some(batch.clone());
                Ok(batch)
            }
            Err(e) => {
                warn!(error = %e, "Run failed");
                Err(e)
            }
        }
    }

    pub fn last_batch(&self) -> Option<ExecutionBatch> {
        self.last_batch.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AiTestCase, AnalysisResult};
    use crate::domain::execution::TestResult;
    use crate::domain::test_case::{NewCustomCase, TestPriority, TestType};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRunner {
        response: std::result::Result<ExecutionBatch, String>,
        calls: AtomicUsize,
        submitted: Mutex<Vec<String>>,
    }

    impl MockRunner {
        fn succeeding(batch: ExecutionBatch) -> Self {
            Self {
                response: Ok(batch),
                calls: AtomicUsize::new(0),
                submitted: Mutex::new(vec![]),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                submitted: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl TestRunnerApi for MockRunner {
        async fn run_tests(
            &self,
            codes: &[String],
            _target_url: &str,
            _auth_token: &str,
        ) -> Result<ExecutionBatch> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.submitted.lock().unwrap() = codes.to_vec();
            self.response.clone().map_err(AppError::ExecutionFailed)
        }
    }

    fn store_with(ai_codes: &[&str], custom_codes: &[&str]) -> TestCaseStore {
        let mut store = TestCaseStore::new();
        if !ai_codes.is_empty() {
            store.set_analysis(AnalysisResult {
                title: "Example".to_string(),
                url: "https://example.com".to_string(),
                features: vec![],
                test_cases: ai_codes
                    .iter()
                    .map(|code| AiTestCase {
                        title: "t".to_string(),
                        description: "d".to_string(),
                        code: code.to_string(),
                    })
                    .collect(),
            });
        }
        for code in custom_codes {
            store.add_custom(NewCustomCase {
                name: "custom".to_string(),
                test_type: TestType::Functional,
                priority: TestPriority::Medium,
                steps: String::new(),
                code: code.to_string(),
            });
        }
        store
    }

    fn batch_of(statuses: &[&str]) -> ExecutionBatch {
        ExecutionBatch {
            results: statuses
                .iter()
                .map(|s| TestResult {
                    status: s.to_string(),
                    output: None,
                    duration_ms: None,
                    error: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_select_all_orders_ai_before_custom() {
        let store = store_with(&["ai0", "ai1"], &["custom0"]);
        let codes = select_codes(RunSelection::All, &store).unwrap();
        assert_eq!(codes, vec!["ai0", "ai1", "custom0"]);
    }

    #[test]
    fn test_select_custom_only_without_custom_fails() {
        let store = store_with(&["ai0"], &[]);
        assert!(matches!(
            select_codes(RunSelection::CustomOnly, &store),
            Err(AppError::NoCustomTests)
        ));
    }

    #[tokio::test]
    async fn test_custom_only_fails_before_network() {
        let runner = Arc::new(MockRunner::succeeding(batch_of(&["pass"])));
        let use_case = RunTestsUseCase::new(runner.clone());
        let store = store_with(&["ai0"], &[]);

        let err = use_case
            .run(RunSelection::CustomOnly, &store, "https://example.com", Some("token"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoCustomTests));
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_selection_fails_before_network() {
        let runner = Arc::new(MockRunner::succeeding(batch_of(&[])));
        let use_case = RunTestsUseCase::new(runner.clone());
        let store = store_with(&[], &[]);

        let err = use_case
            .run(RunSelection::All, &store, "https://example.com", Some("token"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoTestsSelected));
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_submits_selected_codes_in_order() {
        let runner = Arc::new(MockRunner::succeeding(batch_of(&["pass", "fail", "pass"])));
        let use_case = RunTestsUseCase::new(runner.clone());
        let store = store_with(&["ai0", "ai1"], &["custom0"]);

        let batch = use_case
            .run(RunSelection::All, &store, "https://example.com", Some("token"))
            .await
            .unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(
            *runner.submitted.lock().unwrap(),
            vec!["ai0", "ai1", "custom0"]
        );
    }

    #[tokio::test]
    async fn test_missing_token_short_circuits() {
        let runner = Arc::new(MockRunner::succeeding(batch_of(&["pass"])));
        let use_case = RunTestsUseCase::new(runner.clone());
        let store = store_with(&["ai0"], &[]);

        let err = use_case
            .run(RunSelection::AiOnly, &store, "https://example.com", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated));
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_batch() {
        let store = store_with(&["ai0"], &[]);

        let ok_runner = Arc::new(MockRunner::succeeding(batch_of(&["pass"])));
        let use_case = RunTestsUseCase::new(ok_runner);
        use_case
            .run(RunSelection::AiOnly, &store, "https://example.com", Some("token"))
            .await
            .unwrap();
        let first = use_case.last_batch().unwrap();

        let failing = RunTestsUseCase {
            runner: Arc::new(MockRunner::failing("boom")),
            last_batch: Mutex::new(Some(first.clone())),
        };
        let err = failing
            .run(RunSelection::AiOnly, &store, "https://example.com", Some("token"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExecutionFailed(_)));
        assert_eq!(failing.last_batch().unwrap(), first);
    }
}
