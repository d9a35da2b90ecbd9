use crate::application::use_cases::test_case_store::TestCaseStore;
use crate::domain::analysis::{AiTestCase, Feature};
use crate::domain::error::{AppError, Result};
use crate::domain::test_case::CustomTestCase;
use serde::{Deserialize, Serialize};

const CSV_HEADER: &str = "Name,Type,Priority,Steps,Code";

/// A serialized export, ready to hand to whatever triggers the download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub content: String,
    pub filename: String,
    pub media_type: String,
}

/// Shape of the JSON export. Deserializable so a saved export can be read
/// back losslessly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExportDocument {
    pub url: String,
    pub features: Vec<Feature>,
    pub tests: Vec<AiTestCase>,
    pub custom: Vec<CustomTestCase>,
}

/// Concatenates all AI codes then all custom codes into one runnable
/// Cypress source blob.
pub fn export_script(store: &TestCaseStore) -> ExportFile {
    let codes: Vec<&str> = store
        .ai_tests()
        .iter()
        .map(|t| t.code.as_str())
        .chain(store.custom_tests().iter().map(|t| t.code.as_str()))
        .collect();

    ExportFile {
        content: codes.join("\n\n"),
        filename: "tests.js".to_string(),
        media_type: "text/javascript".to_string(),
    }
}

/// Pretty-printed JSON capture of the current URL, features, AI tests and
/// custom tests.
pub fn export_json(store: &TestCaseStore, current_url: &str) -> Result<ExportFile> {
    let document = ExportDocument {
        url: current_url.to_string(),
        features: store.features().to_vec(),
        tests: store.ai_tests().to_vec(),
        custom: store.custom_tests().to_vec(),
    };

    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| AppError::Internal(format!("Failed to serialize export: {}", e)))?;

    Ok(ExportFile {
        content,
        filename: "analysis.json".to_string(),
        media_type: "application/json".to_string(),
    })
}

/// CSV of the custom test cases only; AI cases lack the tabular fields and
/// are left out on purpose. Every value is double-quoted, embedded quotes
/// are doubled, embedded newlines pass through verbatim.
pub fn export_csv(store: &TestCaseStore) -> Result<ExportFile> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for case in store.custom_tests() {
        writer
            .write_record([
                case.name.as_str(),
                case.test_type.as_str(),
                case.priority.as_str(),
                case.steps.as_str(),
                case.code.as_str(),
            ])
            .map_err(|e| AppError::Internal(format!("Failed to write CSV record: {}", e)))?;
    }

    let rows = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush CSV writer: {}", e)))?;
    let rows = String::from_utf8(rows)
        .map_err(|e| AppError::Internal(format!("CSV output was not UTF-8: {}", e)))?;

    Ok(ExportFile {
        content: format!("{}\n{}", CSV_HEADER, rows),
        filename: "tests.csv".to_string(),
        media_type: "text/csv".to_string(),
    })
}
