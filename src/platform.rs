use crate::constants::separators;
use crate::extension::ExtensionRule;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Host families with distinct path conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The extension rule this platform resolves paths with.
    pub fn extension_rule(self) -> ExtensionRule {
        match self {
            Platform::Windows => ExtensionRule::WindowsRule,
            Platform::Unix => ExtensionRule::UnixRule,
        }
    }

    /// Separator written when joining or normalizing paths.
    pub fn separator(self) -> char {
        match self {
            Platform::Windows => separators::WINDOWS,
            Platform::Unix => separators::UNIX,
        }
    }

    /// Whether `c` separates directory components on this platform.
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Platform::Windows => c == separators::WINDOWS || c == separators::WINDOWS_ALT,
            Platform::Unix => c == separators::UNIX,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Platform::Windows => "windows",
            Platform::Unix => "unix",
        };
        write!(f, "{s}")
    }
}

/// The platform this binary was compiled for.
pub fn host_platform() -> Platform {
    if cfg!(windows) {
        Platform::Windows
    } else {
        Platform::Unix
    }
}
