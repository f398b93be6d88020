//! Extension derivation for path strings.
//!
//! The resolver is pure: it never touches the filesystem and never fails. The
//! rule to apply is chosen by the caller, usually once via
//! [`Platform::extension_rule`](crate::platform::Platform::extension_rule).

use crate::constants::{separators, EXTENSION_DOT};

/// How the final segment of a path is turned into an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionRule {
    /// Trailing dots are noise and are stripped before the last dot is located.
    WindowsRule,
    /// The last dot always starts the extension, even when nothing follows it.
    UnixRule,
}

impl ExtensionRule {
    fn ends_segment(self, c: char) -> bool {
        match self {
            ExtensionRule::WindowsRule => {
                c == separators::WINDOWS
                    || c == separators::WINDOWS_ALT
                    || c == separators::WINDOWS_VOLUME
            }
            ExtensionRule::UnixRule => c == separators::UNIX,
        }
    }

    /// Returns the text after the last separator of `path`.
    pub fn final_segment(self, path: &str) -> &str {
        path.rsplit(|c: char| self.ends_segment(c)).next().unwrap_or(path)
    }
}

/// Returns the extension of `path` under `rule`, dot included.
///
/// # Examples
/// ```
/// use dirhandle::extension::{extension_of, ExtensionRule};
///
/// assert_eq!(extension_of("dir/foo.ext", ExtensionRule::UnixRule), ".ext");
/// assert_eq!(extension_of(r"C:\foo.s....", ExtensionRule::WindowsRule), ".s");
/// assert_eq!(extension_of("foo.s.", ExtensionRule::UnixRule), ".");
/// ```
pub fn extension_of(path: &str, rule: ExtensionRule) -> String {
    let segment = rule.final_segment(path);
    let segment = match rule {
        ExtensionRule::WindowsRule => segment.trim_end_matches(EXTENSION_DOT),
        ExtensionRule::UnixRule => segment,
    };

    match segment.rfind(EXTENSION_DOT) {
        Some(dot) => segment[dot..].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ExtensionRule::{UnixRule, WindowsRule};

    const BASE: &str = "/tmp/dirhandle_tests/ExtensionTest_12";

    #[test]
    fn no_dot_means_no_extension() {
        for rule in [WindowsRule, UnixRule] {
            assert_eq!(extension_of(BASE, rule), "");
            assert_eq!(extension_of("", rule), "");
            assert_eq!(extension_of("plain", rule), "");
        }
    }

    #[test]
    fn dots_in_parent_components_are_ignored() {
        assert_eq!(extension_of("/a.b/c", UnixRule), "");
        assert_eq!(extension_of(r"C:\a.b\c", WindowsRule), "");
        assert_eq!(extension_of("a.b/", UnixRule), "");
    }

    #[test]
    fn valid_extensions_are_preserved() {
        for ext in [
            ".ext",
            ".longlonglonglonglonglonglonglonglonglonglonglonglong",
            ".$#@$_)+_)!@@!!@##&_$)#_",
        ] {
            for rule in [WindowsRule, UnixRule] {
                assert_eq!(extension_of(&format!("{BASE}{ext}"), rule), ext);
            }
        }
    }

    #[test]
    fn windows_removes_dot_only_extensions() {
        assert_eq!(extension_of(&format!("{BASE}."), WindowsRule), "");
        assert_eq!(extension_of(&format!("{BASE}............"), WindowsRule), "");
        assert_eq!(extension_of(".", WindowsRule), "");
        assert_eq!(extension_of("............", WindowsRule), "");
    }

    #[test]
    fn windows_curtails_trailing_dots() {
        assert_eq!(extension_of(&format!("{BASE}.s."), WindowsRule), ".s");
        assert_eq!(extension_of(&format!("{BASE}.s.s...."), WindowsRule), ".s");
    }

    #[test]
    fn windows_trims_only_once() {
        // the dot-only run ahead of the trailing dots is part of the same run
        assert_eq!(extension_of("a...", WindowsRule), "");
        assert_eq!(extension_of("a.b...c..", WindowsRule), ".c");
        assert_eq!(extension_of("a.b. .", WindowsRule), ". ");
    }

    #[test]
    fn windows_stops_at_volume_and_alt_separators() {
        assert_eq!(extension_of("C:foo", WindowsRule), "");
        assert_eq!(extension_of("x.y:foo.bar", WindowsRule), ".bar");
        assert_eq!(extension_of("x.y/foo", WindowsRule), "");
    }

    #[test]
    fn unix_last_dot_is_extension() {
        assert_eq!(extension_of(&format!("{BASE}.s."), UnixRule), ".");
        assert_eq!(extension_of(&format!("{BASE}.s.s.....ls"), UnixRule), ".ls");
        assert_eq!(extension_of("............", UnixRule), ".");
        assert_eq!(extension_of(r"a.b\c", UnixRule), r".b\c");
    }

    #[test]
    fn final_segment_per_rule() {
        assert_eq!(WindowsRule.final_segment(r"\\share\dir\leaf.x"), "leaf.x");
        assert_eq!(UnixRule.final_segment("/root/leaf"), "leaf");
        assert_eq!(UnixRule.final_segment("leaf"), "leaf");
        assert_eq!(UnixRule.final_segment("leaf/"), "");
    }
}
