use std::io;
use thiserror::Error;

/// Failure kinds surfaced by directory operations.
///
/// Mirrors the taxonomy callers match on; the variant a filesystem error lands
/// in is decided solely by the OS-reported [`io::ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    PermissionDenied,
    PathTooLong,
    NotFound,
    InvalidPath,
    Other,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot proceed: '{path}' already exists and is not a directory.")]
    AlreadyExists {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied for '{path}'.")]
    PermissionDenied {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Path '{path}' is too long.")]
    PathTooLong {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Path '{path}' or one of its parents does not exist.")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid path '{path}': {reason}.")]
    InvalidPath { path: String, reason: String },

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    ConfigParseError(#[from] serde_json::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Wraps an OS error for `path`, keeping its kind as reported.
    pub fn from_io<P: Into<String>>(path: P, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::AlreadyExists => Error::AlreadyExists { path, source },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            io::ErrorKind::InvalidFilename => Error::PathTooLong { path, source },
            io::ErrorKind::NotFound => Error::NotFound { path, source },
            io::ErrorKind::InvalidInput => {
                Error::InvalidPath { path, reason: source.to_string() }
            }
            _ => Error::IoError(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Error::PathTooLong { .. } => ErrorKind::PathTooLong,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidPath { .. } => ErrorKind::InvalidPath,
            _ => ErrorKind::Other,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
