//! Traversal and aggregation engine: expands a root path into a flat
//! work-list, runs every registered check against every file, and collects
//! problems without ever aborting the scan on a filesystem error.

mod problems;

pub use problems::{FileProblems, ProblemCode, ProblemList};

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::IndexMap;

use crate::checks::Check;
use crate::entry::FileEntry;
use crate::error::{Result, ShareGuardError};
use crate::ignore::IgnoreMatcher;

/// Statistics for one completed scan.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub problems_found: usize,
    pub problem_files: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
struct ScanState {
    total: usize,
    checked: usize,
    started: Option<Instant>,
}

/// Runs a set of registered checks over a directory tree.
///
/// One scan moves through building the work-list, scanning it, and
/// summarizing; [`build_worklist`](Self::build_worklist) resets all session
/// state, so a `Checker` can be reused across scans without stale counts.
pub struct Checker {
    checks: IndexMap<&'static str, Box<dyn Check>>,
    ignore: IgnoreMatcher,
    worklist: Vec<Arc<FileEntry>>,
    problems: ProblemList,
    state: ScanState,
}

impl Checker {
    #[must_use]
    pub fn new(ignore: IgnoreMatcher) -> Self {
        Self {
            checks: IndexMap::new(),
            ignore,
            worklist: Vec::new(),
            problems: ProblemList::new(),
            state: ScanState::default(),
        }
    }

    /// Register a check. Checks are keyed by name: registering the same
    /// name twice replaces the earlier instance, never duplicates it.
    /// Evaluation order across checks is unspecified.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.insert(check.name(), check);
    }

    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Expand `root` into the flat work-list of files to scan.
    ///
    /// The expansion is iterative over an explicit pending queue, so depth
    /// never grows the stack. Ignored paths are skipped before any
    /// classification; symbolic links are skipped entirely unless
    /// `follow_symlinks`, in which case their resolved target is enqueued.
    /// Filesystem errors during expansion become problem-list entries and
    /// expansion continues. Returns the number of files located.
    ///
    /// # Errors
    /// Returns an error only if `root` itself cannot be listed — a scan
    /// that cannot start has nothing to report.
    pub fn build_worklist(&mut self, root: &Path, follow_symlinks: bool) -> Result<usize> {
        self.worklist.clear();
        self.problems = ProblemList::new();
        self.state = ScanState {
            started: Some(Instant::now()),
            ..ScanState::default()
        };

        let mut pending = seed_queue(root)?;
        let mut visited = HashSet::new();
        while let Some(path) = pending.pop_front() {
            if self.ignore.matches(&path) {
                continue;
            }
            match fs::symlink_metadata(&path) {
                Ok(meta) => {
                    self.expand_candidate(path, &meta, follow_symlinks, &mut pending, &mut visited);
                }
                Err(err) => self.record_walk_error(&path, &err),
            }
        }

        self.state.total = self.worklist.len();
        Ok(self.state.total)
    }

    fn expand_candidate(
        &mut self,
        path: PathBuf,
        meta: &fs::Metadata,
        follow_symlinks: bool,
        pending: &mut VecDeque<PathBuf>,
        visited: &mut HashSet<PathBuf>,
    ) {
        let file_type = meta.file_type();
        if file_type.is_symlink() {
            if follow_symlinks {
                match resolve_link(&path) {
                    Ok(target) => pending.push_back(target),
                    Err(err) => self.record_walk_error(&path, &err),
                }
            }
            return;
        }
        if file_type.is_dir() {
            // Followed links can reach a directory twice; expand each once.
            if follow_symlinks && !mark_visited(&path, visited) {
                return;
            }
            self.expand_directory(&path, pending);
            return;
        }
        self.worklist
            .push(Arc::new(FileEntry::from_metadata(path, meta)));
    }

    fn expand_directory(&mut self, path: &Path, pending: &mut VecDeque<PathBuf>) {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                self.record_walk_error(path, &err);
                return;
            }
        };
        for entry in entries {
            match entry {
                Ok(entry) => pending.push_back(entry.path()),
                Err(err) => self.record_walk_error(path, &err),
            }
        }
    }

    fn record_walk_error(&mut self, path: &Path, err: &io::Error) {
        let code = classify_walk_error(path, err);
        log::debug!("{}: {err} -> {code}", path.display());
        let entry = Arc::new(FileEntry::without_metadata(path.to_path_buf()));
        self.problems.add(&entry, code);
    }

    /// Run every registered check against every work-list entry.
    ///
    /// `on_progress` receives (processed, total) after each file; the
    /// processed count is non-decreasing and reaches the total exactly once,
    /// at the end. An empty work-list invokes it never. A check returning
    /// `Err` is recorded as an unknown-error problem for that file and the
    /// remaining checks and files still run.
    pub fn scan<F>(&mut self, mut on_progress: F) -> ScanSummary
    where
        F: FnMut(usize, usize),
    {
        for entry in &self.worklist {
            for check in self.checks.values() {
                match check.check(entry) {
                    Ok(Some(code)) => {
                        self.problems.add(entry, code);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        log::warn!(
                            "check '{}' failed on {}: {err}",
                            check.name(),
                            entry.path().display()
                        );
                        self.problems.add(entry, ProblemCode::UnknownError);
                    }
                }
            }
            self.state.checked += 1;
            on_progress(self.state.checked, self.state.total);
        }
        self.summary()
    }

    /// Build the work-list and scan it in one step, without progress
    /// feedback.
    ///
    /// # Errors
    /// Returns an error if `root` cannot be listed.
    pub fn check_all(&mut self, root: &Path, follow_symlinks: bool) -> Result<ScanSummary> {
        self.build_worklist(root, follow_symlinks)?;
        Ok(self.scan(|_, _| {}))
    }

    fn summary(&self) -> ScanSummary {
        ScanSummary {
            files_scanned: self.state.total,
            problems_found: self.problems.count(),
            problem_files: self.problems.files(),
            elapsed: self
                .state
                .started
                .map_or(Duration::ZERO, |started| started.elapsed()),
        }
    }

    #[must_use]
    pub fn problems(&self) -> &ProblemList {
        &self.problems
    }

    #[must_use]
    pub fn worklist(&self) -> &[Arc<FileEntry>] {
        &self.worklist
    }
}

fn seed_queue(root: &Path) -> Result<VecDeque<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|e| ShareGuardError::Stat {
        path: root.to_path_buf(),
        source: e,
    })?;
    let mut pending = VecDeque::new();
    for entry in entries {
        let entry = entry.map_err(|e| ShareGuardError::Stat {
            path: root.to_path_buf(),
            source: e,
        })?;
        pending.push_back(entry.path());
    }
    Ok(pending)
}

/// Map a filesystem error during expansion onto the problem taxonomy.
///
/// NotFound where the path still lstats is a dangling link; NotFound
/// otherwise means the path vanished mid-scan.
fn classify_walk_error(path: &Path, err: &io::Error) -> ProblemCode {
    match err.kind() {
        io::ErrorKind::NotFound => {
            if fs::symlink_metadata(path).is_ok() {
                ProblemCode::BrokenLink
            } else {
                ProblemCode::UnknownError
            }
        }
        io::ErrorKind::PermissionDenied => ProblemCode::DirNotWritable,
        _ => ProblemCode::UnknownError,
    }
}

/// Resolve a symlink one level and confirm the target exists.
fn resolve_link(path: &Path) -> io::Result<PathBuf> {
    let target = fs::read_link(path)?;
    let resolved = match path.parent() {
        Some(parent) if target.is_relative() => parent.join(&target),
        _ => target,
    };
    fs::metadata(&resolved)?;
    Ok(resolved)
}

fn mark_visited(path: &Path, visited: &mut HashSet<PathBuf>) -> bool {
    let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    visited.insert(canonical)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
