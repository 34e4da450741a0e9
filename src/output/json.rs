use serde::Serialize;

use crate::checker::{ProblemList, ScanSummary};
use crate::error::Result;

use super::ReportFormatter;

#[derive(Serialize)]
struct JsonReport {
    files_scanned: usize,
    problems_found: usize,
    problem_files: usize,
    elapsed_seconds: f64,
    files: Vec<JsonFile>,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    problems: Vec<JsonProblem>,
}

#[derive(Serialize)]
struct JsonProblem {
    code: &'static str,
    description: &'static str,
}

/// Renders the report as pretty-printed JSON with stable field names.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, problems: &ProblemList, summary: &ScanSummary) -> Result<String> {
        let files = problems
            .iter()
            .map(|file| JsonFile {
                path: file.entry().path().to_string_lossy().into_owned(),
                problems: file
                    .codes()
                    .map(|code| JsonProblem {
                        code: code.as_str(),
                        description: code.description(),
                    })
                    .collect(),
            })
            .collect();

        let report = JsonReport {
            files_scanned: summary.files_scanned,
            problems_found: summary.problems_found,
            problem_files: summary.problem_files,
            elapsed_seconds: summary.elapsed.as_secs_f64(),
            files,
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
