//! Helpers over `/`-separated virtual paths
//!
//! Virtual paths identify entries in the server's store; they are
//! resolved against the server's configured root and are never treated
//! as OS paths on this side.

/// The server-side root directory
pub const ROOT: &str = "/";

/// Join a parent path and a child name with exactly one separator.
pub fn join(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

/// Last segment of a path, `None` for the root.
pub fn file_name(path: &str) -> Option<&str> {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Extension of the last segment. `None` when there is no dot, or when
/// the only dot leads the name (dotfiles have no extension).
pub fn extension_of(path: &str) -> Option<&str> {
    let name = file_name(path)?;
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// True when any segment of the path is `..`.
pub fn contains_traversal(path: &str) -> bool {
    path.split(['/', '\\']).any(|segment| segment == "..")
}

/// Check an entry name against shapes the store rejects: blank names,
/// embedded separators, reserved characters, and names ending in a dot
/// or a space.
pub fn is_valid_name(name: &str) -> bool {
    if name.trim().is_empty() || name.ends_with('.') || name.ends_with(' ') {
        return false;
    }
    !name
        .chars()
        .any(|c| matches!(c, '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*'))
}
