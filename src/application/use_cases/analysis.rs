use crate::application::use_cases::validation::require_token;
use crate::domain::analysis::AnalysisResult;
use crate::domain::error::Result;
use crate::infrastructure::api_clients::WebsiteAnalyzerApi;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// Drives one analysis request. On failure nothing is applied; the caller
/// only hands the result to the store when this returns `Ok`, which keeps
/// replacement atomic.
pub struct AnalyzeWebsiteUseCase {
    client: Arc<dyn WebsiteAnalyzerApi + Send + Sync>,
}

impl AnalyzeWebsiteUseCase {
    pub fn new(client: Arc<dyn WebsiteAnalyzerApi + Send + Sync>) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, url: &Url, auth_token: Option<&str>) -> Result<AnalysisResult> {
        let token = require_token(auth_token)?;

        info!(url = %url, "Analyzing website");
        match self.client.analyze(url.as_str(), token).await {
            Ok(result) => {
                info!(
                    features = result.features.len(),
                    ai_tests = result.test_cases.len(),
                    "Analysis complete"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Analysis request failed");
                Err(e)
            }
        }
    }
}
