pub mod http;

pub use http::HttpApiClient;

use crate::domain::analysis::AnalysisResult;
use crate::domain::error::Result;
use crate::domain::execution::ExecutionBatch;
use async_trait::async_trait;

/// Remote analysis endpoint: takes a URL, returns the detected features
/// and generated test cases.
#[async_trait]
pub trait WebsiteAnalyzerApi {
    async fn analyze(&self, url: &str, auth_token: &str) -> Result<AnalysisResult>;
}

/// Remote execution endpoint: takes an ordered batch of test codes plus
/// the target URL, returns per-test results in the same order.
#[async_trait]
pub trait TestRunnerApi {
    async fn run_tests(
        &self,
        codes: &[String],
        target_url: &str,
        auth_token: &str,
    ) -> Result<ExecutionBatch>;
}
