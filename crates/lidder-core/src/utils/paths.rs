//! Path identity keys.

use std::path::{Component, Path};

/// Converts a file path into the key used for expected and actual file sets.
///
/// `.` components are dropped and the remaining components are joined with
/// `/`, so `./src/a.go`, `src/./a.go` and `src/a.go` share one key. `..` is
/// kept as written; keys are never resolved against the filesystem.
///
/// # Example
///
/// ```
/// use lidder_core::utils::path_key;
/// use std::path::Path;
///
/// assert_eq!(path_key(Path::new("./src/a.go")), "src/a.go");
/// ```
#[must_use]
pub fn path_key(path: &Path) -> String {
    let mut key = String::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::RootDir => key.push('/'),
            Component::Prefix(prefix) => key.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::ParentDir => push_segment(&mut key, ".."),
            Component::Normal(s) => push_segment(&mut key, &s.to_string_lossy()),
        }
    }
    if key.is_empty() {
        key.push('.');
    }
    key
}

/// Same as [`path_key`] for a path given as a string.
#[must_use]
pub fn str_key(path: &str) -> String {
    path_key(Path::new(path))
}

fn push_segment(key: &mut String, segment: &str) {
    if !key.is_empty() && !key.ends_with('/') {
        key.push('/');
    }
    key.push_str(segment);
}
