use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the scanning phase.
///
/// Hidden in quiet mode, when stderr is not a TTY, or when there is nothing
/// to scan — a zero-file tree renders no progress at all.
pub struct CheckProgress {
    bar: ProgressBar,
}

impl CheckProgress {
    /// The bar outputs to stderr so it never interferes with report output
    /// on stdout.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let bar = if quiet || !is_tty || total == 0 {
            ProgressBar::hidden()
        } else {
            Self::create_visible_bar(total)
        };
        Self { bar }
    }

    fn create_visible_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40}] {percent:>3}% ({pos}/{len} files)")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("##-"),
        );
        bar
    }

    /// Move the bar to `processed` files done.
    pub fn update(&self, processed: usize) {
        self.bar.set_position(processed as u64);
    }

    /// Finish and clear the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
