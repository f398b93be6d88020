use crate::attributes::AttributeFlags;
use crate::error::{Error, Result};
use crate::fs::interface::FileSystem;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// [`FileSystem`] backed by the host's `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
fn host_attributes(_path: &Path, metadata: &fs::Metadata) -> AttributeFlags {
    use std::os::windows::fs::MetadataExt;
    AttributeFlags::from_bits_truncate(metadata.file_attributes())
}

#[cfg(not(windows))]
fn host_attributes(path: &Path, metadata: &fs::Metadata) -> AttributeFlags {
    let mut flags = AttributeFlags::empty();
    if metadata.is_dir() {
        flags |= AttributeFlags::DIRECTORY;
    }
    if metadata.permissions().readonly() {
        flags |= AttributeFlags::READ_ONLY;
    }
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') && name != "." && name != "..");
    if hidden {
        flags |= AttributeFlags::HIDDEN;
    }
    flags
}

/// Clearing read-only restores owner write only; group and other bits stay as they were.
#[cfg(unix)]
fn apply_read_only(permissions: &mut fs::Permissions, read_only: bool) {
    use std::os::unix::fs::PermissionsExt;
    let mode = permissions.mode();
    let mode = if read_only { mode & !0o222 } else { mode | 0o200 };
    permissions.set_mode(mode);
}

#[cfg(not(unix))]
fn apply_read_only(permissions: &mut fs::Permissions, read_only: bool) {
    permissions.set_readonly(read_only);
}

impl FileSystem for LocalFileSystem {
    fn create_directory_at(&self, path: &str) -> Result<()> {
        match fs::create_dir(path) {
            Ok(()) => {
                debug!("Created directory '{}'", path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && Path::new(path).is_dir() => {
                debug!("Directory '{}' already exists", path);
                Ok(())
            }
            Err(e) => Err(Error::from_io(path, e)),
        }
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn set_filesystem_attributes(&self, path: &str, flags: AttributeFlags) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
        let mut permissions = metadata.permissions();
        let read_only = flags.contains(AttributeFlags::READ_ONLY);
        if permissions.readonly() != read_only {
            apply_read_only(&mut permissions, read_only);
            fs::set_permissions(path, permissions).map_err(|e| Error::from_io(path, e))?;
        }
        debug!("Applied attributes {:?} to '{}'", flags, path);
        Ok(())
    }

    fn read_attributes(&self, path: &str) -> Result<AttributeFlags> {
        let link = fs::symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
        let mut flags = if link.file_type().is_symlink() {
            let target = fs::metadata(path).unwrap_or(link);
            host_attributes(Path::new(path), &target) | AttributeFlags::REPARSE_POINT
        } else {
            host_attributes(Path::new(path), &link)
        };
        if flags.is_empty() {
            flags = AttributeFlags::NORMAL;
        }
        Ok(flags)
    }

    fn remove_directory_at(&self, path: &str, recursive: bool) -> Result<()> {
        let removed = if recursive { fs::remove_dir_all(path) } else { fs::remove_dir(path) };
        removed.map_err(|e| Error::from_io(path, e))?;
        debug!("Removed directory '{}' (recursive: {})", path, recursive);
        Ok(())
    }

    fn move_directory(&self, from: &str, to: &str) -> Result<()> {
        fs::rename(from, to).map_err(|e| Error::from_io(from, e))?;
        debug!("Moved directory '{}' to '{}'", from, to);
        Ok(())
    }
}
