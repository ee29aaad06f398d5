//! Input file discovery
//!
//! This module handles finding IAEA header files under a search directory
//! and deriving the merger's input stems from them.

use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Recursively enumerate regular files under `root` whose name ends with
/// `suffix`.
///
/// The sequence is lazy and yields paths in the underlying traversal order,
/// which is not sorted. Entries that cannot be read and paths that are not
/// valid UTF-8 are skipped. An empty result is valid; the caller decides
/// whether it is fatal.
pub fn find_files<'a>(
    root: &Utf8Path,
    suffix: &'a str,
) -> impl Iterator<Item = Utf8PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(suffix))
        })
        .filter_map(|entry| Utf8PathBuf::from_path_buf(entry.into_path()).ok())
}

/// Return `name` without the trailing `suffix` if present, unchanged
/// otherwise.
pub fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_root(temp_dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp_dir.path()).unwrap()
    }

    #[test]
    fn test_find_files_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);

        fs::write(root.join("a.IAEAheader"), "").unwrap();
        fs::write(root.join("a"), "").unwrap();
        fs::create_dir_all(root.join("sub/nested")).unwrap();
        fs::write(root.join("sub/b.IAEAheader"), "").unwrap();
        fs::write(root.join("sub/b"), "").unwrap();
        fs::write(root.join("sub/nested/c.IAEAheader"), "").unwrap();
        fs::write(root.join("sub/notes.txt"), "").unwrap();

        let found: HashSet<Utf8PathBuf> = find_files(root, ".IAEAheader").collect();

        let expected: HashSet<Utf8PathBuf> = [
            root.join("a.IAEAheader"),
            root.join("sub/b.IAEAheader"),
            root.join("sub/nested/c.IAEAheader"),
        ]
        .into_iter()
        .collect();

        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_files_ignores_matching_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);

        // A directory whose name carries the suffix must not be yielded
        fs::create_dir(root.join("dir.IAEAheader")).unwrap();
        fs::write(root.join("dir.IAEAheader/a.IAEAheader"), "").unwrap();

        let found: Vec<Utf8PathBuf> = find_files(root, ".IAEAheader").collect();

        assert_eq!(found, vec![root.join("dir.IAEAheader/a.IAEAheader")]);
    }

    #[test]
    fn test_find_files_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);

        let found: Vec<Utf8PathBuf> = find_files(root, ".IAEAheader").collect();

        assert!(found.is_empty());
    }

    #[test]
    fn test_strip_suffix_removes_trailing_suffix() {
        assert_eq!(strip_suffix("a.IAEAheader", ".IAEAheader"), "a");
        assert_eq!(
            strip_suffix("sub/b.IAEAheader", ".IAEAheader"),
            "sub/b"
        );
    }

    #[test]
    fn test_strip_suffix_no_match_is_identity() {
        assert_eq!(strip_suffix("a.IAEAphsp", ".IAEAheader"), "a.IAEAphsp");
        assert_eq!(strip_suffix("a", ".IAEAheader"), "a");
        // Suffix in the middle does not count
        assert_eq!(
            strip_suffix("a.IAEAheader.bak", ".IAEAheader"),
            "a.IAEAheader.bak"
        );
    }

    #[test]
    fn test_strip_suffix_round_trip() {
        let name = "runs/shard_03.IAEAheader";
        let stem = strip_suffix(name, ".IAEAheader");
        assert_eq!(format!("{}{}", stem, ".IAEAheader"), name);
    }
}
