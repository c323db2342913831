#![allow(dead_code)]

use dirtree::tree::TreeConfig;
use std::fs;
use tempfile::TempDir;

pub fn files_config() -> TreeConfig {
    TreeConfig {
        include_files: true,
    }
}

pub fn dirs_only_config() -> TreeConfig {
    TreeConfig {
        include_files: false,
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Like `create_fixture`, but files get the given contents.
pub fn create_fixture_with(dirs: &[&str], files: &[(&str, &str)]) -> TempDir {
    let tmp = create_fixture(dirs);
    for (p, contents) in files {
        let full = tmp.path().join(p);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, contents).unwrap();
    }
    tmp
}
