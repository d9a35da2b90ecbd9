use crate::domain::execution::ExecutionBatch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate_percent: u32,
}

/// Presentation row for one result. `index` is the 1-based position in
/// submission order, for display only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TestOutcome {
    pub index: usize,
    pub status: String,
    pub output: Option<String>,
}

/// Tallies a batch. Totals come from the batch itself, never the request:
/// the runner is the source of truth on cardinality, so an empty response
/// must not divide by zero.
pub fn summarize(batch: &ExecutionBatch) -> RunSummary {
    let total = batch.len();
    let passed = batch.results.iter().filter(|r| r.passed()).count();
    let failed = total - passed;
    let pass_rate_percent = if total == 0 {
        0
    } else {
        ((passed as f64 / total as f64) * 100.0).round() as u32
    };

    RunSummary {
        total,
        passed,
        failed,
        pass_rate_percent,
    }
}

pub fn outcomes(batch: &ExecutionBatch) -> Vec<TestOutcome> {
    batch
        .results
        .iter()
        .enumerate()
        .map(|(i, result)| TestOutcome {
            index: i + 1,
            status: result.status.clone(),
            output: result.output.clone(),
        })
        .collect()
}
