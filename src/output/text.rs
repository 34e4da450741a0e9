use std::fmt::Write;

use crate::checker::{ProblemList, ScanSummary};
use crate::error::Result;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders per-file problem listings followed by a summary line.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, problems: &ProblemList, summary: &ScanSummary) -> Result<String> {
        let mut out = String::new();

        for file in problems.iter() {
            let path = file.entry().path().display().to_string();
            writeln!(out, "✗ {}", self.colorize(&path, ansi::RED)).ok();
            for code in file.codes() {
                writeln!(out, "   {code}: {}", code.description()).ok();
            }
        }

        if problems.is_empty() {
            writeln!(out, "{}", self.colorize("✓ No problems found.", ansi::GREEN)).ok();
        }

        writeln!(
            out,
            "Found {} problems over {} files in {:.2} seconds.",
            summary.problems_found,
            summary.files_scanned,
            summary.elapsed.as_secs_f64()
        )
        .ok();

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
