use super::*;
use crate::entry::FileEntry;

fn entry(path: &str) -> FileEntry {
    FileEntry::without_metadata(path.into())
}

#[test]
fn clean_names_pass() {
    for name in ["/data/run_01.bam", "/data/counts-final.txt", "/data/a.b.c"] {
        assert_eq!(PortableName.check(&entry(name)).unwrap(), None, "{name}");
    }
}

#[test]
fn whitespace_in_name_is_flagged() {
    assert_eq!(
        PortableName.check(&entry("/data/my results.txt")).unwrap(),
        Some(ProblemCode::NonPortableName)
    );
}

#[test]
fn control_characters_are_flagged() {
    assert_eq!(
        PortableName.check(&entry("/data/bad\x07name")).unwrap(),
        Some(ProblemCode::NonPortableName)
    );
}

#[test]
fn whitespace_in_parent_directories_is_not_the_files_problem() {
    assert_eq!(
        PortableName
            .check(&entry("/messy dir/clean_file.txt"))
            .unwrap(),
        None
    );
}
