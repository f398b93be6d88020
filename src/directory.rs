//! Handles to directory locations with a cached view of the filesystem.
//!
//! A [`DirectoryHandle`] remembers what it last learned about its path. Every
//! operation that changes the filesystem drops that knowledge, so the next
//! query goes back to disk:
//!
//! | from      | event                                   | to        |
//! |-----------|-----------------------------------------|-----------|
//! | `Unknown` | probe finds a directory                 | `Exists`  |
//! | `Unknown` | probe finds nothing                     | `Missing` |
//! | any       | `create`, `delete`, `move_to`,          | `Unknown` |
//! |           | `set_attributes`, `refresh`             |           |

use std::fmt::Display;

use log::{debug, info};

use crate::attributes::AttributeFlags;
use crate::error::Result;
use crate::extension::extension_of;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::ioutils::{normalize_path, validate_path};
use crate::platform::{host_platform, Platform};

/// What a handle currently believes about the existence of its directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistsCache {
    #[default]
    Unknown,
    Exists,
    Missing,
}

impl From<bool> for ExistsCache {
    fn from(exists: bool) -> Self {
        if exists {
            ExistsCache::Exists
        } else {
            ExistsCache::Missing
        }
    }
}

/// A directory location on disk.
///
/// The extension is derived once, when the handle is built, and stays fixed
/// for the lifetime of the handle. Handles never share state: two handles for
/// the same path keep independent caches.
#[derive(Debug, Clone)]
pub struct DirectoryHandle<F: FileSystem = LocalFileSystem> {
    full_path: String,
    extension: String,
    platform: Platform,
    exists: ExistsCache,
    attributes: Option<AttributeFlags>,
    fs: F,
}

impl DirectoryHandle<LocalFileSystem> {
    /// Creates a handle for `path` using the host platform's rules.
    pub fn new<S: AsRef<str>>(path: S) -> Self {
        Self::with_platform(path, host_platform())
    }

    /// Creates a handle for `path` resolved with `platform`'s rules.
    pub fn with_platform<S: AsRef<str>>(path: S, platform: Platform) -> Self {
        Self::with_fs(path, platform, LocalFileSystem::new())
    }
}

impl<F: FileSystem> DirectoryHandle<F> {
    /// Creates a handle that delegates all disk access to `fs`.
    pub fn with_fs<S: AsRef<str>>(path: S, platform: Platform, fs: F) -> Self {
        let full_path = normalize_path(path.as_ref(), platform);
        let extension = extension_of(&full_path, platform.extension_rule());
        debug!("New handle for '{}' (extension: '{}')", full_path, extension);
        Self {
            full_path,
            extension,
            platform,
            exists: ExistsCache::Unknown,
            attributes: None,
            fs,
        }
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// The extension derived at construction, dot included, or `""`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The final segment of the path.
    pub fn name(&self) -> &str {
        self.platform.extension_rule().final_segment(&self.full_path)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn cache_state(&self) -> ExistsCache {
        self.exists
    }

    fn invalidate(&mut self) {
        debug!("Invalidating cached state for '{}'", self.full_path);
        self.exists = ExistsCache::Unknown;
        self.attributes = None;
    }

    /// Creates the directory (one level).
    ///
    /// On success the cached existence and attributes are reset rather than
    /// set, so the next [`exists`](Self::exists) or
    /// [`attributes`](Self::attributes) call reflects the filesystem as it is.
    pub fn create(&mut self) -> Result<()> {
        validate_path(&self.full_path)?;
        self.fs.create_directory_at(&self.full_path)?;
        self.invalidate();
        info!("Created directory '{}'", self.full_path);
        Ok(())
    }

    /// Whether the directory exists, probing the filesystem only when the
    /// cached answer is unknown.
    pub fn exists(&mut self) -> bool {
        match self.exists {
            ExistsCache::Exists => true,
            ExistsCache::Missing => false,
            ExistsCache::Unknown => {
                let exists = self.fs.directory_exists(&self.full_path);
                debug!("Probed '{}': exists = {}", self.full_path, exists);
                self.exists = exists.into();
                exists
            }
        }
    }

    /// Forgets everything cached about the directory.
    pub fn refresh(&mut self) {
        self.invalidate();
    }

    /// The directory's attributes, read from disk when not cached.
    pub fn attributes(&mut self) -> Result<AttributeFlags> {
        if let Some(flags) = self.attributes {
            return Ok(flags);
        }
        let flags = self.fs.read_attributes(&self.full_path)?;
        self.attributes = Some(flags);
        Ok(flags)
    }

    /// Applies `flags` to the directory. Combinations are not checked here;
    /// whatever the filesystem rejects is reported as-is.
    pub fn set_attributes(&mut self, flags: AttributeFlags) -> Result<()> {
        self.fs.set_filesystem_attributes(&self.full_path, flags)?;
        self.invalidate();
        Ok(())
    }

    /// Removes the directory. With `recursive`, its contents go too.
    pub fn delete(&mut self, recursive: bool) -> Result<()> {
        self.fs.remove_directory_at(&self.full_path, recursive)?;
        self.invalidate();
        info!("Deleted directory '{}'", self.full_path);
        Ok(())
    }
}

impl<F: FileSystem + Clone> DirectoryHandle<F> {
    /// Moves the directory to `dest` and returns a handle for the new location.
    ///
    /// This handle keeps pointing at the old path with its cache reset.
    pub fn move_to<S: AsRef<str>>(&mut self, dest: S) -> Result<DirectoryHandle<F>> {
        let target = DirectoryHandle::with_fs(dest, self.platform, self.fs.clone());
        validate_path(&target.full_path)?;
        self.fs.move_directory(&self.full_path, &target.full_path)?;
        self.invalidate();
        info!("Moved directory '{}' to '{}'", self.full_path, target.full_path);
        Ok(target)
    }
}

impl<F: FileSystem> Display for DirectoryHandle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_path)
    }
}
