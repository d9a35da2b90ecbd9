pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use crate::application::use_cases::analysis::AnalyzeWebsiteUseCase;
pub use crate::application::use_cases::execution::{RunSelection, RunTestsUseCase};
pub use crate::application::use_cases::export::{
    export_csv, export_json, export_script, ExportFile,
};
pub use crate::application::use_cases::reporting::{outcomes, summarize, RunSummary, TestOutcome};
pub use crate::application::use_cases::test_case_store::{StoreCounts, TestCaseStore};
pub use crate::application::use_cases::validation::{validate_code_set, validate_url};
pub use crate::domain::error::{AppError, Result};
pub use crate::infrastructure::api_clients::{HttpApiClient, TestRunnerApi, WebsiteAnalyzerApi};
pub use crate::infrastructure::config::ConfigService;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}
