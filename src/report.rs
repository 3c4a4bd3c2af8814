//! End-of-run summary and result persistence.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use crate::types::BlockResult;

/// Aggregate outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub successful: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[BlockResult]) -> Self {
        let successful = results.iter().filter(|r| r.success).count();
        Self {
            successful,
            failed: results.len() - successful,
        }
    }
}

/// Print the summary, with a detail block listing each failed target.
pub fn print_summary(results: &[BlockResult]) {
    let summary = BatchSummary::from_results(results);

    println!();
    println!("=== Block summary ===");
    println!("Successful: {}", summary.successful);
    println!("Failed: {}", summary.failed);

    if summary.failed > 0 {
        println!();
        println!("=== Failed users ===");
        for result in results.iter().filter(|r| !r.success) {
            println!("Steam ID: {}", result.steam_id);
            println!("Error: {}", result.response_text);
            println!();
        }
    }
}

/// Default output name, derived from the local wall clock.
pub fn default_results_path() -> PathBuf {
    PathBuf::from(format!(
        "block_results_{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Write the full result list as pretty-printed JSON to `path`, or to a
/// timestamped default when none is given. Returns the path written.
pub fn save_results(results: &[BlockResult], path: Option<&str>) -> Result<PathBuf> {
    let path = path.map(PathBuf::from).unwrap_or_else(default_results_path);
    let json = serde_json::to_string_pretty(results).context("failed to serialize results")?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write results to {}", path.display()))?;
    Ok(path)
}
