use crate::domain::error::{AppError, Result};
use url::Url;

/// Validates the URL typed into the input field before any network call.
pub fn validate_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyInput("URL is required".to_string()));
    }

    Url::parse(trimmed).map_err(|e| AppError::MalformedUrl(format!("{}: {}", trimmed, e)))
}

/// A run request must carry at least one test code.
pub fn validate_code_set(codes: &[String]) -> Result<()> {
    if codes.is_empty() {
        return Err(AppError::NoTestsSelected);
    }
    Ok(())
}

/// Missing or blank tokens short-circuit to the re-authentication flow;
/// callers match on `Unauthenticated` and redirect.
pub fn require_token(token: Option<&str>) -> Result<&str> {
    match token {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(AppError::Unauthenticated),
    }
}
