//! Lexical path utilities.
//!
//! Import targets are resolved relative to the importing document without
//! touching the filesystem, so the analysis stays deterministic and purely
//! in-memory. Existence is a separate, injected concern.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically: drop `.` components and fold `..` into the
/// preceding component where possible. Does not consult the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // "/.." stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve a raw import value against the importing document's directory.
pub fn resolve_import(importer: &Path, raw_value: &str) -> PathBuf {
    let raw = Path::new(raw_value);
    if raw.is_absolute() {
        return normalize_path(raw);
    }
    let dir = importer.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&dir.join(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_dir() {
        assert_eq!(
            normalize_path(Path::new("specs/./login.litmus")),
            PathBuf::from("specs/login.litmus")
        );
    }

    #[test]
    fn test_normalize_folds_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("specs/sub/../login.litmus")),
            PathBuf::from("specs/login.litmus")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parent() {
        assert_eq!(
            normalize_path(Path::new("../login.litmus")),
            PathBuf::from("../login.litmus")
        );
    }

    #[test]
    fn test_resolve_relative_to_importer_dir() {
        let resolved = resolve_import(Path::new("/work/specs/main.litmus"), "users.litmus");
        assert_eq!(resolved, PathBuf::from("/work/specs/users.litmus"));
    }

    #[test]
    fn test_resolve_with_parent_traversal() {
        let resolved = resolve_import(Path::new("/work/specs/sub/a.litmus"), "../b.litmus");
        assert_eq!(resolved, PathBuf::from("/work/specs/b.litmus"));
    }

    #[test]
    fn test_resolve_absolute_value() {
        let resolved = resolve_import(Path::new("/work/a.litmus"), "/other/b.litmus");
        assert_eq!(resolved, PathBuf::from("/other/b.litmus"));
    }

    #[test]
    fn test_self_reference_resolves_to_importer() {
        let importer = Path::new("/work/specs/main.litmus");
        assert_eq!(resolve_import(importer, "main.litmus"), importer);
    }
}
