//! Shared helpers for file-level tests.

use std::path::{Path, PathBuf};

/// Writes `lines` joined by `\n` (no trailing newline) to `dir/name`.
pub fn write_list(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

pub fn read_list(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
