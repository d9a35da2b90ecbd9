pub mod analysis;
pub mod execution;
pub mod export;
pub mod reporting;
pub mod test_case_store;
pub mod validation;
