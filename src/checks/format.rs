use super::Check;
use crate::checker::ProblemCode;
use crate::entry::FileEntry;
use crate::error::Result;

/// Extensions treated as uncompressed plain-text data.
const PLAINTEXT_EXTENSIONS: &[&str] = &[
    "txt", "csv", "tsv", "sam", "vcf", "bed", "gff", "fastq", "fq",
];

/// Size above which an uncompressed plain-text file is flagged.
pub const DEFAULT_LARGE_PLAINTEXT_THRESHOLD: u64 = 100 * 1024 * 1024;

fn has_extension(entry: &FileEntry, candidates: &[&str]) -> bool {
    entry
        .path()
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| candidates.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Flags plain-text SAM alignments, which belong on disk as BAM.
pub struct SamCompressed;

impl Check for SamCompressed {
    fn name(&self) -> &'static str {
        "sam-compressed"
    }

    fn check(&self, entry: &FileEntry) -> Result<Option<ProblemCode>> {
        Ok(has_extension(entry, &["sam"]).then_some(ProblemCode::SamNotCompressed))
    }
}

/// Flags large uncompressed plain-text data files.
pub struct LargePlaintext {
    threshold: u64,
}

impl LargePlaintext {
    #[must_use]
    pub const fn with_threshold(threshold: u64) -> Self {
        Self { threshold }
    }
}

impl Default for LargePlaintext {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_LARGE_PLAINTEXT_THRESHOLD)
    }
}

impl Check for LargePlaintext {
    fn name(&self) -> &'static str {
        "large-plaintext"
    }

    fn check(&self, entry: &FileEntry) -> Result<Option<ProblemCode>> {
        let oversized =
            has_extension(entry, PLAINTEXT_EXTENSIONS) && entry.size() > self.threshold;
        Ok(oversized.then_some(ProblemCode::LargePlaintext))
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
