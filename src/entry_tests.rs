use std::fs;
use std::io::Read;

use tempfile::TempDir;

use super::*;
use crate::ShareGuardError;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const HELLO_SHA256: &str = "4dca0fd5f424a31b03ab807cbae77eb32bf2d089eed1cee154b3afed458de0dc";
const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const KIB_OF_A_SHA256: &str = "2edc986847e209b4016e141a6dc8716d3207350f416969382d431539bf292e4a";

/// Wraps a byte slice and records how many bytes were handed out.
struct TrackingReader<'a> {
    data: &'a [u8],
    bytes_read: usize,
}

impl<'a> TrackingReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bytes_read: 0,
        }
    }
}

impl Read for TrackingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.data.read(buf)?;
        self.bytes_read += n;
        Ok(n)
    }
}

#[test]
fn fingerprint_matches_reference_digest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("greeting.txt");
    fs::write(&path, "hello, world!\n").unwrap();

    let entry = FileEntry::new(&path, false).unwrap();
    assert_eq!(entry.fingerprint().unwrap(), HELLO_SHA256);
}

#[test]
fn fingerprint_of_empty_file_is_fixed_constant() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty");
    fs::write(&path, "").unwrap();

    let entry = FileEntry::new(&path, false).unwrap();
    assert_eq!(entry.fingerprint().unwrap(), EMPTY_SHA256);
}

#[test]
fn fingerprint_is_computed_once_and_cached() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.txt");
    fs::write(&path, "abc").unwrap();

    let entry = FileEntry::new(&path, false).unwrap();
    assert_eq!(entry.fingerprint().unwrap(), ABC_SHA256);

    // The cached digest must survive the content changing underneath.
    fs::write(&path, "something else entirely").unwrap();
    assert_eq!(entry.fingerprint().unwrap(), ABC_SHA256);
}

#[test]
fn identical_content_yields_identical_fingerprints() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.bin");
    let second = temp_dir.path().join("b.bin");
    fs::write(&first, b"\x00\xffsame bytes\x80").unwrap();
    fs::write(&second, b"\x00\xffsame bytes\x80").unwrap();

    let a = FileEntry::new(&first, false).unwrap();
    let b = FileEntry::new(&second, false).unwrap();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
}

#[test]
fn different_content_yields_different_fingerprints() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.txt");
    let second = temp_dir.path().join("b.txt");
    fs::write(&first, "abc").unwrap();
    fs::write(&second, "abd").unwrap();

    let a = FileEntry::new(&first, false).unwrap();
    let b = FileEntry::new(&second, false).unwrap();
    assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
}

#[test]
fn hashing_reads_every_byte_across_chunk_boundaries() {
    for len in [
        0usize,
        1,
        2,
        127,
        1023,
        1024,
        FINGERPRINT_CHUNK_SIZE - 1,
        FINGERPRINT_CHUNK_SIZE,
        FINGERPRINT_CHUNK_SIZE + 1,
        3 * FINGERPRINT_CHUNK_SIZE + 17,
    ] {
        let data = vec![b'a'; len];
        let mut reader = TrackingReader::new(&data);
        hash_reader(&mut reader).unwrap();
        assert_eq!(reader.bytes_read, len, "length {len}");
    }
}

#[test]
fn streamed_digest_matches_reference_for_multi_chunk_input() {
    let data = vec![b'a'; 1024];
    assert_eq!(hash_reader(data.as_slice()).unwrap(), KIB_OF_A_SHA256);
}

#[test]
fn recognized_extensions_are_important() {
    for name in ["aln.sam", "aln.bam", "calls.vcf", "reads.fastq", "x.FQ"] {
        assert!(is_important_path(Path::new(name)), "{name}");
    }
}

#[test]
fn unrecognized_extensions_are_never_important() {
    for name in ["notes.txt", "data.csv", "sam", "archive.tar.gz", "noext"] {
        assert!(!is_important_path(Path::new(name)), "{name}");
    }
}

#[test]
fn empty_file_with_recognized_extension_is_still_important() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.bam");
    fs::write(&path, "").unwrap();

    let entry = FileEntry::new(&path, false).unwrap();
    assert!(entry.is_important());
    assert_eq!(entry.size(), 0);
}

#[test]
fn construction_records_size_without_reading_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("five.txt");
    fs::write(&path, "12345").unwrap();

    let entry = FileEntry::new(&path, false).unwrap();
    assert_eq!(entry.size(), 5);
    assert_eq!(entry.path(), path.as_path());
}

#[test]
fn construction_fails_with_stat_error_for_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    let err = FileEntry::new(&missing, false).unwrap_err();
    assert!(matches!(err, ShareGuardError::Stat { .. }));
}

#[test]
fn fingerprint_of_missing_file_is_read_error() {
    let entry = FileEntry::without_metadata("/no/such/file".into());
    assert!(matches!(
        entry.fingerprint().unwrap_err(),
        ShareGuardError::FileRead { .. }
    ));
}

#[cfg(unix)]
#[test]
fn mode_bits_are_populated_from_metadata() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("modes.txt");
    fs::write(&path, "x").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    let entry = FileEntry::new(&path, false).unwrap();
    assert_eq!(entry.mode() & 0o777, 0o640);
}
