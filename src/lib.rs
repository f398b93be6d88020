/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Host platform detection and separator conventions.
pub mod platform;

/// Platform-aware extension resolution.
pub mod extension;

/// Filesystem attribute flags.
pub mod attributes;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with path strings.
pub mod ioutils;

/// The filesystem operations directory handles delegate to.
pub mod fs;

/// Directory handles with cached existence state.
pub mod directory;

/// Configuration file handling.
pub mod config;

/// Handles argument parsing and command execution.
pub mod cli;

pub use attributes::AttributeFlags;
pub use directory::{DirectoryHandle, ExistsCache};
pub use error::{Error, ErrorKind, Result};
pub use extension::{extension_of, ExtensionRule};
pub use platform::{host_platform, Platform};
