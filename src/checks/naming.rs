use std::sync::LazyLock;

use regex::Regex;

use super::Check;
use crate::checker::ProblemCode;
use crate::entry::FileEntry;
use crate::error::Result;

// SAFETY: static pattern, valid by inspection
static NON_PORTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x00-\x1f]").expect("valid pattern"));

/// Flags file names that trip up shell scripts and batch pipelines:
/// whitespace or control characters anywhere in the name.
pub struct PortableName;

impl Check for PortableName {
    fn name(&self) -> &'static str {
        "portable-name"
    }

    fn check(&self, entry: &FileEntry) -> Result<Option<ProblemCode>> {
        let flagged = entry
            .path()
            .file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| NON_PORTABLE.is_match(&name));
        Ok(flagged.then_some(ProblemCode::NonPortableName))
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
