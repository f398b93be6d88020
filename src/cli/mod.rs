pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, CommonArgs, CreateArgs,
    ExtensionArgs, InspectArgs,
};
pub use runner::{resolve_config, run};
