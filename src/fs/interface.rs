use crate::attributes::AttributeFlags;
use crate::error::Result;

/// Filesystem operations a [`DirectoryHandle`](crate::directory::DirectoryHandle) delegates to.
///
/// Implementations report failures through [`Error::from_io`](crate::error::Error::from_io)
/// so the OS error kind reaches the caller untouched.
pub trait FileSystem {
    /// Creates a single directory level at `path`.
    ///
    /// Succeeds when `path` is already a directory.
    fn create_directory_at(&self, path: &str) -> Result<()>;

    /// Live probe: whether `path` currently names a directory.
    fn directory_exists(&self, path: &str) -> bool;

    fn set_filesystem_attributes(&self, path: &str, flags: AttributeFlags) -> Result<()>;

    fn read_attributes(&self, path: &str) -> Result<AttributeFlags>;

    fn remove_directory_at(&self, path: &str, recursive: bool) -> Result<()>;

    fn move_directory(&self, from: &str, to: &str) -> Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn create_directory_at(&self, path: &str) -> Result<()> {
        (**self).create_directory_at(path)
    }

    fn directory_exists(&self, path: &str) -> bool {
        (**self).directory_exists(path)
    }

    fn set_filesystem_attributes(&self, path: &str, flags: AttributeFlags) -> Result<()> {
        (**self).set_filesystem_attributes(path, flags)
    }

    fn read_attributes(&self, path: &str) -> Result<AttributeFlags> {
        (**self).read_attributes(path)
    }

    fn remove_directory_at(&self, path: &str, recursive: bool) -> Result<()> {
        (**self).remove_directory_at(path, recursive)
    }

    fn move_directory(&self, from: &str, to: &str) -> Result<()> {
        (**self).move_directory(from, to)
    }
}
