//! Built-in file-level compliance checks.

mod format;
mod naming;
mod perms;

pub use format::{DEFAULT_LARGE_PLAINTEXT_THRESHOLD, LargePlaintext, SamCompressed};
pub use naming::PortableName;
pub use perms::GroupReadable;

use crate::checker::ProblemCode;
use crate::entry::FileEntry;
use crate::error::Result;

/// A single file-level compliance check.
///
/// Implementations inspect one file and report at most one problem code.
/// Checks are independent: the checker runs every registered check against
/// every file, and one failing check never suppresses the others.
pub trait Check {
    /// Stable name used for registration and for `disabled_checks` in the
    /// configuration file.
    fn name(&self) -> &'static str;

    /// Inspect one file.
    ///
    /// # Errors
    /// Returns an error when the check itself cannot run; the checker
    /// records that as an unknown-error problem against the file.
    fn check(&self, entry: &FileEntry) -> Result<Option<ProblemCode>>;
}

/// The full built-in check set.
#[must_use]
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(GroupReadable),
        Box::new(SamCompressed),
        Box::new(LargePlaintext::default()),
        Box::new(PortableName),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
