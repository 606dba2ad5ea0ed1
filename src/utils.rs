use std::path::{Component, Path, PathBuf};

/// Lexically removes `.` and `..` components without touching the filesystem.
///
/// Symlinks are not followed, so `link/..` collapses to the directory holding `link`.
/// A `..` at the root stays at the root.
pub fn normalize_path(input: &Path) -> PathBuf {
    let mut new_path = PathBuf::new();

    for component in input.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                new_path.pop();
            }
            other => new_path.push(other.as_os_str()),
        }
    }

    new_path
}
