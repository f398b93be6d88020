//! Runtime configuration loaded from a JSON file.
//!
//! ```json
//! { "platform": "windows", "verbose": 2 }
//! ```
//!
//! Every field is optional. Command-line flags take precedence over the file,
//! and the host platform is used when neither names one.

use crate::error::{Error, Result};
use crate::platform::{host_platform, Platform};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub verbose: Option<u8>,
}

impl Config {
    pub fn from_json(buf: &str) -> Result<Self> {
        Ok(serde_json::from_str(buf)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let buf = std::fs::read_to_string(path)
            .map_err(|e| Error::from_io(path.display().to_string(), e))?;
        let config = Self::from_json(&buf)?;
        debug!("Loaded config from '{}': {:?}", path.display(), config);
        Ok(config)
    }

    /// Overlays values given on the command line.
    pub fn merge(self, platform: Option<Platform>, verbose: u8) -> Self {
        Self {
            platform: platform.or(self.platform),
            verbose: if verbose > 0 { Some(verbose) } else { self.verbose },
        }
    }

    /// The platform whose rules handles should follow.
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(host_platform)
    }

    pub fn verbose(&self) -> u8 {
        self.verbose.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = Config::from_json(r#"{"platform": "windows", "verbose": 2}"#).unwrap();
        assert_eq!(config.platform(), Platform::Windows);
        assert_eq!(config.verbose(), 2);
    }

    #[test]
    fn empty_object_defaults_to_host() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.platform(), host_platform());
        assert_eq!(config.verbose(), 0);
    }

    #[test]
    fn rejects_unknown_keys_and_platforms() {
        assert!(matches!(
            Config::from_json(r#"{"colour": true}"#),
            Err(Error::ConfigParseError(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"platform": "plan9"}"#),
            Err(Error::ConfigParseError(_))
        ));
    }

    #[test]
    fn cli_values_win() {
        let file = Config { platform: Some(Platform::Unix), verbose: Some(1) };
        let merged = file.merge(Some(Platform::Windows), 3);
        assert_eq!(merged.platform(), Platform::Windows);
        assert_eq!(merged.verbose(), 3);

        let kept = file.merge(None, 0);
        assert_eq!(kept, file);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::NotFound);
    }
}
