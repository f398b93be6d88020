use std::path::Path;

use crate::error::{Error, Result};
use crate::extension::{extension_of, ExtensionRule};

/// Extension trait for Path to bridge it with string-based path handling
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error::InvalidPath)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use dirhandle::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Resolves the extension of this path under `rule`.
    ///
    /// Unlike [`Path::extension`], the returned string keeps the leading dot
    /// and follows the trimming rules of [`ExtensionRule`]. Paths that are not
    /// valid Unicode are resolved on their lossy form.
    ///
    /// # Examples
    /// ```
    /// use dirhandle::ext::PathExt;
    /// use dirhandle::extension::ExtensionRule;
    /// use std::path::Path;
    ///
    /// let path = Path::new("archive.tar.gz");
    /// assert_eq!(path.extension_with(ExtensionRule::UnixRule), ".gz");
    /// ```
    fn extension_with(&self, rule: ExtensionRule) -> String;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| Error::InvalidPath {
            path: self.display().to_string(),
            reason: "contains invalid Unicode characters".to_string(),
        })
    }

    fn extension_with(&self, rule: ExtensionRule) -> String {
        extension_of(&self.to_string_lossy(), rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_to_str_checked_valid() {
        let path = Path::new("valid_path");
        assert_eq!(path.to_str_checked().unwrap(), "valid_path");
    }

    #[cfg(unix)]
    #[test]
    fn test_to_str_checked_invalid_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"bad\xffname"));
        let err = path.to_str_checked().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidPath);
    }

    #[test]
    fn test_extension_with_differs_from_std() {
        let path = Path::new("dir/name.s.");
        assert_eq!(path.extension_with(ExtensionRule::UnixRule), ".");
        assert_eq!(path.extension_with(ExtensionRule::WindowsRule), ".s");
    }
}
