use crate::attributes::AttributeFlags;
use crate::constants::verbosity;
use crate::platform::Platform;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for dirhandle.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the extension of each path, one per line.
    Extension(ExtensionArgs),
    /// Create a directory (one level) and optionally apply attributes.
    Create(CreateArgs),
    /// Show what a handle knows about a path.
    Inspect(InspectArgs),
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Extension(args) => &args.common,
            Commands::Create(args) => &args.common,
            Commands::Inspect(args) => &args.common,
        }
    }
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path rules to apply instead of the host's.
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// JSON config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ExtensionArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Attributes to apply after creation (comma-separated, e.g. `read-only,hidden`).
    #[arg(long, value_parser = parse_attributes)]
    pub attributes: Option<AttributeFlags>,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

fn parse_attributes(list: &str) -> Result<AttributeFlags, String> {
    AttributeFlags::parse_list(list).map_err(|e| e.to_string())
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_extension_command() {
        let cli = Cli::parse_from(["dirhandle", "extension", "--platform", "windows", "a.s.", "b"]);
        let Commands::Extension(args) = cli.command else {
            panic!("expected extension command");
        };
        assert_eq!(args.common.platform, Some(Platform::Windows));
        assert_eq!(args.paths, vec![PathBuf::from("a.s."), PathBuf::from("b")]);
    }

    #[test]
    fn parses_create_with_attributes() {
        let cli = Cli::parse_from([
            "dirhandle",
            "create",
            "-vv",
            "--attributes",
            "directory,normal",
            "testdir",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.common.verbose, 2);
        assert_eq!(args.attributes, Some(AttributeFlags::DIRECTORY | AttributeFlags::NORMAL));
        assert_eq!(args.path, PathBuf::from("testdir"));
    }

    #[test]
    fn rejects_unknown_attribute() {
        let result = Cli::try_parse_from(["dirhandle", "create", "--attributes", "sparkly", "d"]);
        assert!(result.is_err());
    }

    #[test]
    fn extension_requires_a_path() {
        assert!(Cli::try_parse_from(["dirhandle", "extension"]).is_err());
    }
}
