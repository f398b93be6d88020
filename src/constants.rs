//! Constants used throughout dirhandle

/// Character that introduces an extension
pub const EXTENSION_DOT: char = '.';

/// Separators recognised when resolving paths
pub mod separators {
    pub const UNIX: char = '/';
    pub const WINDOWS: char = '\\';
    pub const WINDOWS_ALT: char = '/';
    pub const WINDOWS_VOLUME: char = ':';
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
