use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::error::{Result, ShareGuardError};

/// Chunk size for streaming fingerprint computation.
pub const FINGERPRINT_CHUNK_SIZE: usize = 8192;

/// File extensions whose content is always domain-significant.
const IMPORTANT_EXTENSIONS: &[&str] = &[
    "sam", "bam", "cram", "vcf", "bcf", "fastq", "fq", "bed", "gff",
];

/// One file discovered by a scan: metadata plus a lazily computed content
/// fingerprint.
///
/// Construction only stats the path; content is not read until
/// [`fingerprint`](Self::fingerprint) is first called, and the digest is
/// then cached for the lifetime of the entry.
#[derive(Debug)]
pub struct FileEntry {
    path: PathBuf,
    mode: u32,
    size: u64,
    important: bool,
    fingerprint: OnceLock<String>,
}

impl FileEntry {
    /// Stat `path` and build an entry from its metadata.
    ///
    /// With `follow_symlinks` the target of a link is stat'ed; otherwise the
    /// link itself is.
    ///
    /// # Errors
    /// Returns an error if the path cannot be stat'ed.
    pub fn new(path: impl Into<PathBuf>, follow_symlinks: bool) -> Result<Self> {
        let path = path.into();
        let meta = if follow_symlinks {
            fs::metadata(&path)
        } else {
            fs::symlink_metadata(&path)
        }
        .map_err(|e| ShareGuardError::Stat {
            path: path.clone(),
            source: e,
        })?;
        Ok(Self::from_metadata(path, &meta))
    }

    /// Build an entry from metadata already obtained during traversal.
    #[must_use]
    pub fn from_metadata(path: PathBuf, meta: &fs::Metadata) -> Self {
        Self {
            important: is_important_path(&path),
            mode: mode_of(meta),
            size: meta.len(),
            path,
            fingerprint: OnceLock::new(),
        }
    }

    /// Build an entry for a path whose metadata could not be obtained.
    ///
    /// Mode and size are zero; used to record traversal problems against
    /// paths that failed to stat.
    #[must_use]
    pub fn without_metadata(path: PathBuf) -> Self {
        Self {
            important: is_important_path(&path),
            mode: 0,
            size: 0,
            path,
            fingerprint: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unix permission/mode bits; 0 when unavailable.
    #[must_use]
    pub const fn mode(&self) -> u32 {
        self.mode
    }

    /// File size in bytes at stat time.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub const fn is_important(&self) -> bool {
        self.important
    }

    /// Lowercase-hex SHA-256 digest of the file's content.
    ///
    /// The file is streamed in fixed-size chunks, so memory use is bounded
    /// regardless of file size. The digest is computed at most once;
    /// repeated calls return the cached value without touching the file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn fingerprint(&self) -> Result<&str> {
        if let Some(hex) = self.fingerprint.get() {
            return Ok(hex.as_str());
        }
        let hex = hash_file(&self.path)?;
        Ok(self.fingerprint.get_or_init(|| hex).as_str())
    }
}

/// Whether a path's extension marks it as domain-significant.
///
/// Pure classification on the path alone; content and size play no part.
#[must_use]
pub fn is_important_path(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| {
            IMPORTANT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn hash_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path).map_err(|e| ShareGuardError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    hash_reader(file).map_err(|e| ShareGuardError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Stream `reader` through SHA-256 in fixed-size chunks.
pub(crate) fn hash_reader<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; FINGERPRINT_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(unix)]
fn mode_of(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.mode()
}

#[cfg(not(unix))]
fn mode_of(_meta: &fs::Metadata) -> u32 {
    0
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
