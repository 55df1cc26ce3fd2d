use super::mock::MockFs;
use super::*;
use tempfile::TempDir;

#[test]
fn test_mock_fs_read_dir_lists_direct_children() {
    let fs = MockFs::new();
    fs.add_dir("/import");
    fs.add_file("/import/a.ear");
    fs.add_dir("/import/nested");
    fs.add_file("/import/nested/b.ear");
    fs.add_file("/other/c.ear");

    let mut names: Vec<_> = fs
        .read_dir(Path::new("/import"))
        .unwrap()
        .into_iter()
        .filter_map(|e| e.file_name())
        .collect();
    names.sort();

    assert_eq!(names, vec!["a.ear", "nested"]);
}

#[test]
fn test_mock_fs_read_dir_errors() {
    let fs = MockFs::new();
    fs.add_file("/file.ear");

    assert!(fs.read_dir(Path::new("/file.ear")).is_err());
    assert!(fs.read_dir(Path::new("/missing")).is_err());
}

#[test]
fn test_mock_fs_is_file() {
    let fs = MockFs::new();
    fs.add_dir("/import");
    fs.add_file("/import/a.ear");

    assert!(fs.is_file(Path::new("/import/a.ear")));
    assert!(!fs.is_file(Path::new("/import")));
    assert!(!fs.is_file(Path::new("/import/missing.ear")));
}

#[test]
fn test_real_fs_read_dir_lists_entries() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("app.ear"), b"ear").unwrap();
    std::fs::create_dir(temp_dir.path().join("sub")).unwrap();

    let mut names: Vec<_> = RealFs
        .read_dir(temp_dir.path())
        .unwrap()
        .into_iter()
        .filter_map(|e| e.file_name())
        .collect();
    names.sort();

    assert_eq!(names, vec!["app.ear", "sub"]);
    assert!(RealFs.is_file(&temp_dir.path().join("app.ear")));
    assert!(!RealFs.is_file(&temp_dir.path().join("sub")));
}

#[cfg(unix)]
#[test]
fn test_dir_entry_name_is_lossy_for_non_utf8() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let entry = FsDirEntry {
        path: Path::new("/import").join(OsStr::from_bytes(b"caf\xe9-1.ear")),
    };
    assert_eq!(entry.file_name().as_deref(), Some("caf\u{FFFD}-1.ear"));
}

#[test]
fn test_real_fs_read_dir_on_missing_dir_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(RealFs.read_dir(&temp_dir.path().join("missing")).is_err());
}
