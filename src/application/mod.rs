pub mod use_cases;

pub use use_cases::analysis::AnalyzeWebsiteUseCase;
pub use use_cases::execution::RunTestsUseCase;
pub use use_cases::test_case_store::TestCaseStore;
