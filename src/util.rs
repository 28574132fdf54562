use std::env;
use std::path::{Component, Path, PathBuf};

use crate::env::Env;

/// GOPATH entries in priority order. Unset or empty GOPATH yields no roots.
pub(crate) fn search_roots(env: &dyn Env) -> Vec<PathBuf> {
    match env.getenv("GOPATH") {
        Some(list) => env::split_paths(&list)
            .filter(|root| !root.as_os_str().is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Lexically cleans a path: drops `.` segments, resolves `..` against the
/// preceding segment, trims trailing separators. Never touches the
/// filesystem.
pub(crate) fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Converts a relative path to a forward-slash import path. Returns `None`
/// for the empty path, for any non-UTF-8 segment, and for any path that is
/// not purely a chain of normal segments (absolute, `.` or `..`), so callers
/// can treat "not a proper descendant" as a non-match.
pub(crate) fn to_slash(relative: &Path) -> Option<String> {
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            _ => return None,
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

/// Converts a forward-slash import path to a native relative path.
pub(crate) fn from_slash(import_path: &str) -> PathBuf {
    import_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}
