//! User-declared ignore rules, analogous to a version-control ignore file.
//!
//! Rules live one per line in a plain-text file; `#` starts a comment that
//! runs to the end of the line, and surrounding whitespace is trimmed. A
//! rule excludes a path when it equals the path's full string exactly, or
//! when interpreted as a glob it matches the path. Blank rules never match.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, ShareGuardError};

/// Name of the per-user ignore file, looked up in the home directory.
pub const IGNORE_FILE_NAME: &str = ".shareguardignore";

/// Decides whether a path is excluded from scanning.
#[derive(Debug)]
pub struct IgnoreMatcher {
    rules: Vec<String>,
    globs: GlobSet,
}

impl Default for IgnoreMatcher {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnoreMatcher {
    /// A matcher that excludes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            globs: GlobSet::empty(),
        }
    }

    /// Load rules from `path`. An absent file yields an empty matcher, not
    /// an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, or contains
    /// an invalid glob pattern.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::empty());
        }
        let contents = fs::read_to_string(path).map_err(|e| ShareGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_rules(parse(&contents))
    }

    /// Build a matcher from already-parsed rule strings.
    ///
    /// # Errors
    /// Returns an error if any non-empty rule is an invalid glob pattern.
    pub fn from_rules(rules: Vec<String>) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for rule in rules.iter().filter(|r| !r.is_empty()) {
            let glob = Glob::new(rule).map_err(|e| ShareGuardError::InvalidPattern {
                pattern: rule.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let globs = builder
            .build()
            .map_err(|e| ShareGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { rules, globs })
    }

    /// Whether `path` is excluded by any rule.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.rules.iter().any(|r| !r.is_empty() && *r == text) || self.globs.is_match(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Split `contents` into rule strings: comments stripped, whitespace
/// trimmed. Every line yields an entry; blank results are retained so that
/// matching stays the matcher's responsibility.
#[must_use]
pub fn parse(contents: &str) -> Vec<String> {
    contents.lines().map(strip_comment).collect()
}

fn strip_comment(line: &str) -> String {
    line.split_once('#')
        .map_or(line, |(head, _)| head)
        .trim()
        .to_string()
}

/// Conventional location of the ignore file: a dotfile in the user's home
/// directory.
#[must_use]
pub fn default_ignore_path() -> Option<PathBuf> {
    directories::UserDirs::new().map(|dirs| dirs.home_dir().join(IGNORE_FILE_NAME))
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
