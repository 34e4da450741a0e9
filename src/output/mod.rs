mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::CheckProgress;
pub use text::{ColorMode, TextFormatter};

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::checker::{ProblemList, ScanSummary};
use crate::error::{Result, ShareGuardError};

/// Trait for rendering a finished scan into an output format.
pub trait ReportFormatter {
    /// Render the problem list and scan statistics into a string.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    fn format(&self, problems: &ProblemList, summary: &ScanSummary) -> Result<String>;
}

/// Drives a formatter into an output sink.
///
/// A scan that completes but cannot be reported is a user-visible failure:
/// every write error surfaces as [`ShareGuardError::ReportWrite`].
pub struct ReportWriter {
    formatter: Box<dyn ReportFormatter>,
}

impl ReportWriter {
    #[must_use]
    pub fn new(formatter: Box<dyn ReportFormatter>) -> Self {
        Self { formatter }
    }

    /// Render and write the report to `out`.
    ///
    /// # Errors
    /// Returns an error if formatting fails or the sink rejects the write.
    pub fn write<W: Write>(
        &self,
        out: &mut W,
        problems: &ProblemList,
        summary: &ScanSummary,
    ) -> Result<()> {
        let rendered = self.formatter.format(problems, summary)?;
        out.write_all(rendered.as_bytes())
            .map_err(ShareGuardError::ReportWrite)?;
        out.flush().map_err(ShareGuardError::ReportWrite)
    }

    /// Render and write the report to a file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_path(
        &self,
        path: &Path,
        problems: &ProblemList,
        summary: &ScanSummary,
    ) -> Result<()> {
        let mut file = File::create(path).map_err(ShareGuardError::ReportWrite)?;
        self.write(&mut file, problems, summary)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
