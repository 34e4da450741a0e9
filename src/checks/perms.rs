use super::Check;
use crate::checker::ProblemCode;
use crate::entry::FileEntry;
use crate::error::Result;

const GROUP_READ: u32 = 0o040;

/// Flags files that withhold group read permission.
///
/// Files in a shared data area are useless to the rest of the group unless
/// they are group-readable. A mode of 0 means no permission information was
/// available for the entry and the check is skipped.
pub struct GroupReadable;

impl Check for GroupReadable {
    fn name(&self) -> &'static str {
        "group-readable"
    }

    fn check(&self, entry: &FileEntry) -> Result<Option<ProblemCode>> {
        let mode = entry.mode();
        if mode == 0 {
            return Ok(None);
        }
        Ok((mode & GROUP_READ == 0).then_some(ProblemCode::FileNotGroupReadable))
    }
}

#[cfg(test)]
#[path = "perms_tests.rs"]
mod tests;
