use crate::constants::separators;
use crate::error::{Error, Result};
use crate::platform::Platform;

/// Rewrites separators to `platform`'s primary one and collapses repeats.
///
/// A leading doubled separator is kept as-is so network-share paths such as
/// `\\server\share` survive. Nothing else about the path changes: no
/// absolutization, no `.`/`..` resolution, no trailing-dot trimming.
pub fn normalize_path(path: &str, platform: Platform) -> String {
    let sep = platform.separator();
    let rest = path.trim_start_matches(|c: char| platform.is_separator(c));
    let leading = path.len() - rest.len();

    let mut normalized = String::with_capacity(path.len());
    for _ in 0..leading.min(2) {
        normalized.push(sep);
    }

    let mut previous_was_sep = false;
    for c in rest.chars() {
        if platform.is_separator(c) {
            if !previous_was_sep {
                normalized.push(sep);
            }
            previous_was_sep = true;
        } else {
            normalized.push(c);
            previous_was_sep = false;
        }
    }
    normalized
}

fn is_rooted(segment: &str, platform: Platform) -> bool {
    if segment.starts_with(|c: char| platform.is_separator(c)) {
        return true;
    }
    platform == Platform::Windows
        && segment.chars().nth(1) == Some(separators::WINDOWS_VOLUME)
        && segment.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Joins path segments with `platform`'s separator.
///
/// Empty segments are skipped, a separator is only inserted when the previous
/// segment does not already end with one, and a rooted segment discards
/// everything joined before it.
///
/// # Examples
/// ```
/// use dirhandle::ioutils::path_join;
/// use dirhandle::platform::Platform;
///
/// assert_eq!(path_join(&["a", "b", ""], Platform::Unix), "a/b");
/// assert_eq!(path_join(&["a", "/abs"], Platform::Unix), "/abs");
/// ```
pub fn path_join<S: AsRef<str>>(segments: &[S], platform: Platform) -> String {
    let mut joined = String::new();
    for segment in segments.iter().map(AsRef::as_ref) {
        if segment.is_empty() {
            continue;
        }
        if is_rooted(segment, platform) {
            joined.clear();
        } else if !joined.is_empty() && !joined.ends_with(|c: char| platform.is_separator(c)) {
            joined.push(platform.separator());
        }
        joined.push_str(segment);
    }
    joined
}

/// Rejects paths no filesystem call could accept.
pub fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_string(),
            reason: "path is empty".to_string(),
        });
    }
    if path.contains('\0') {
        return Err(Error::InvalidPath {
            path: path.escape_debug().to_string(),
            reason: "path contains a NUL character".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_windows_separators() {
        assert_eq!(normalize_path("a/b\\c", Platform::Windows), r"a\b\c");
        assert_eq!(normalize_path(r"a\\\b//c", Platform::Windows), r"a\b\c");
    }

    #[test]
    fn keeps_network_share_prefix() {
        let share = r"\\contoso\amusement\device";
        assert_eq!(normalize_path(share, Platform::Windows), share);
        assert_eq!(normalize_path("//contoso/amusement", Platform::Windows), r"\\contoso\amusement");
        assert_eq!(normalize_path("//contoso/amusement", Platform::Unix), "//contoso/amusement");
        assert_eq!(normalize_path("////x", Platform::Unix), "//x");
    }

    #[test]
    fn unix_leaves_backslashes_alone() {
        assert_eq!(normalize_path(r"a\b//c/", Platform::Unix), r"a\b/c/");
        assert_eq!(normalize_path("name.s....", Platform::Unix), "name.s....");
    }

    #[test]
    fn joins_and_skips_empty_segments() {
        assert_eq!(path_join(&["base", ""], Platform::Unix), "base");
        assert_eq!(path_join(&["", "base"], Platform::Unix), "base");
        assert_eq!(path_join(&["a/", "b"], Platform::Unix), "a/b");
        assert_eq!(path_join(&["contoso", "amusement", "device"], Platform::Windows), r"contoso\amusement\device");
        let empty: [&str; 0] = [];
        assert_eq!(path_join(&empty, Platform::Unix), "");
    }

    #[test]
    fn rooted_segment_restarts_join() {
        assert_eq!(path_join(&["a", r"\b", "c"], Platform::Windows), r"\b\c");
        assert_eq!(path_join(&["a", r"D:\b"], Platform::Windows), r"D:\b");
        assert_eq!(path_join(&["a", "/b"], Platform::Unix), "/b");
        assert_eq!(path_join(&["a", r"\b"], Platform::Unix), r"a/\b");
    }

    #[test]
    fn validates_paths() {
        assert!(validate_path("ok").is_ok());
        assert!(matches!(validate_path(""), Err(Error::InvalidPath { .. })));
        assert!(matches!(validate_path("a\0b"), Err(Error::InvalidPath { .. })));
    }
}
