use super::{TestRunnerApi, WebsiteAnalyzerApi};
use crate::domain::analysis::{AiTestCase, AnalysisResult, Feature};
use crate::domain::error::{AppError, Result};
use crate::domain::execution::{ExecutionBatch, TestResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const ANALYZE_PATH: &str = "/api/website-analyzer";
const RUN_TESTS_PATH: &str = "/api/run-cypress-tests";

/// Wire shape of the analyze response. Every optional field gets its
/// default here so the rest of the crate never re-derives one.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default, rename = "testCases")]
    test_cases: Vec<AiTestCase>,
}

impl AnalyzeResponse {
    fn into_result(self, requested_url: &str) -> AnalysisResult {
        AnalysisResult {
            title: self.title.unwrap_or_else(|| "Website".to_string()),
            url: self.url.unwrap_or_else(|| requested_url.to_string()),
            features: self.features,
            test_cases: self.test_cases,
        }
    }
}

// The runner also reports top-level tallies (total/passed/passRate); those
// are recomputed locally from `results`, so only `results` is read.
#[derive(Debug, Deserialize)]
struct RunResponse {
    #[serde(default)]
    results: Vec<TestResult>,
}

pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path.trim_start_matches('/'))
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl WebsiteAnalyzerApi for HttpApiClient {
    async fn analyze(&self, url: &str, auth_token: &str) -> Result<AnalysisResult> {
        let response = self
            .client
            .post(self.endpoint(ANALYZE_PATH))
            .bearer_auth(auth_token)
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(|e| AppError::AnalysisFailed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::AnalysisFailed(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse JSON: {}", e)))?;

        Ok(body.into_result(url))
    }
}

#[async_trait]
impl TestRunnerApi for HttpApiClient {
    async fn run_tests(
        &self,
        codes: &[String],
        target_url: &str,
        auth_token: &str,
    ) -> Result<ExecutionBatch> {
        let response = self
            .client
            .post(self.endpoint(RUN_TESTS_PATH))
            .bearer_auth(auth_token)
            .json(&json!({ "testCodes": codes, "url": target_url }))
            .send()
            .await
            .map_err(|e| AppError::ExecutionFailed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::ExecutionFailed(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        let body: RunResponse = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse JSON: {}", e)))?;

        Ok(ExecutionBatch {
            results: body.results,
        })
    }
}
