use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::entry::FileEntry;

/// Stable identifier for one category of compliance violation.
///
/// The string forms are a contract with downstream tooling: existing codes
/// never change, new codes are additive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemCode {
    BrokenLink,
    DirNotWritable,
    UnknownError,
    FileNotGroupReadable,
    SamNotCompressed,
    LargePlaintext,
    NonPortableName,
}

impl ProblemCode {
    /// Every code the scanner can report.
    pub const ALL: &'static [Self] = &[
        Self::BrokenLink,
        Self::DirNotWritable,
        Self::UnknownError,
        Self::FileNotGroupReadable,
        Self::SamNotCompressed,
        Self::LargePlaintext,
        Self::NonPortableName,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BrokenLink => "broken-link",
            Self::DirNotWritable => "dir-not-writable",
            Self::UnknownError => "unknown-error",
            Self::FileNotGroupReadable => "file-not-group-readable",
            Self::SamNotCompressed => "sam-not-compressed",
            Self::LargePlaintext => "large-plaintext",
            Self::NonPortableName => "non-portable-name",
        }
    }

    /// Human-readable description rendered in reports.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BrokenLink => "symbolic link points to a path that does not exist",
            Self::DirNotWritable => "directory or file could not be accessed (permission denied)",
            Self::UnknownError => "an unexpected filesystem or check error occurred",
            Self::FileNotGroupReadable => "file withholds group read permission",
            Self::SamNotCompressed => "plain-text SAM alignment should be converted to BAM",
            Self::LargePlaintext => "large plain-text data file should be compressed",
            Self::NonPortableName => "file name contains whitespace or control characters",
        }
    }
}

impl fmt::Display for ProblemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The problems recorded against one file, in discovery order.
#[derive(Debug)]
pub struct FileProblems {
    entry: Arc<FileEntry>,
    codes: IndexSet<ProblemCode>,
}

impl FileProblems {
    #[must_use]
    pub fn entry(&self) -> &FileEntry {
        &self.entry
    }

    pub fn codes(&self) -> impl Iterator<Item = ProblemCode> + '_ {
        self.codes.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, code: ProblemCode) -> bool {
        self.codes.contains(&code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Append-only multimap from file to problem codes.
///
/// A file appears only once it has at least one problem; iteration yields
/// files in the order they were first given one. Duplicate (file, code)
/// pairs are recorded once.
#[derive(Debug, Default)]
pub struct ProblemList {
    entries: IndexMap<PathBuf, FileProblems>,
}

impl ProblemList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `code` against `entry`. Returns whether the pair was new.
    pub fn add(&mut self, entry: &Arc<FileEntry>, code: ProblemCode) -> bool {
        self.entries
            .entry(entry.path().to_path_buf())
            .or_insert_with(|| FileProblems {
                entry: Arc::clone(entry),
                codes: IndexSet::new(),
            })
            .codes
            .insert(code)
    }

    /// Total number of distinct (file, code) pairs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.values().map(FileProblems::len).sum()
    }

    /// Number of files with at least one problem.
    #[must_use]
    pub fn files(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&FileProblems> {
        self.entries.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileProblems> {
        self.entries.values()
    }
}

#[cfg(test)]
#[path = "problems_tests.rs"]
mod tests;
