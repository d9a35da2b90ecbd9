use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    EmptyInput(String),
    MalformedUrl(String),
    Unauthenticated,
    AnalysisFailed(String),
    NoTestsSelected,
    NoCustomTests,
    ExecutionFailed(String),
    ParseError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            AppError::MalformedUrl(msg) => write!(f, "Malformed URL: {}", msg),
            AppError::Unauthenticated => write!(f, "Not authenticated"),
            AppError::AnalysisFailed(msg) => write!(f, "Analysis failed: {}", msg),
            AppError::NoTestsSelected => write!(f, "No tests selected"),
            AppError::NoCustomTests => write!(f, "No custom test cases available"),
            AppError::ExecutionFailed(msg) => write!(f, "Test execution failed: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type Result<T> = std::result::Result<T, AppError>;
