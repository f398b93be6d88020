use crate::cli::args::{Commands, CommonArgs, CreateArgs, ExtensionArgs, InspectArgs};
use crate::config::Config;
use crate::directory::DirectoryHandle;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use log::debug;
use std::io::Write;

/// Loads the config file named on the command line, if any, and overlays the
/// command-line flags on top of it.
pub fn resolve_config(common: &CommonArgs) -> Result<Config> {
    let file = match &common.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(file.merge(common.platform, common.verbose))
}

/// Executes `command`, writing its report to `out`.
pub fn run<W: Write>(command: &Commands, config: &Config, out: &mut W) -> Result<()> {
    debug!("Running {:?} with {:?}", command, config);
    match command {
        Commands::Extension(args) => run_extension(args, config, out),
        Commands::Create(args) => run_create(args, config, out),
        Commands::Inspect(args) => run_inspect(args, config, out),
    }
}

fn run_extension<W: Write>(args: &ExtensionArgs, config: &Config, out: &mut W) -> Result<()> {
    let rule = config.platform().extension_rule();
    for path in &args.paths {
        path.to_str_checked()?;
        writeln!(out, "{}", path.extension_with(rule))?;
    }
    Ok(())
}

fn run_create<W: Write>(args: &CreateArgs, config: &Config, out: &mut W) -> Result<()> {
    let mut handle = DirectoryHandle::with_platform(args.path.to_str_checked()?, config.platform());
    handle.create()?;
    if let Some(flags) = args.attributes {
        handle.set_attributes(flags)?;
    }
    if !handle.exists() {
        return Err(Error::Other(anyhow::anyhow!(
            "'{}' was created but is not visible as a directory",
            handle
        )));
    }
    writeln!(out, "created {}", handle)?;
    Ok(())
}

fn run_inspect<W: Write>(args: &InspectArgs, config: &Config, out: &mut W) -> Result<()> {
    let mut handle = DirectoryHandle::with_platform(args.path.to_str_checked()?, config.platform());
    writeln!(out, "path:       {}", handle.full_path())?;
    writeln!(out, "name:       {}", handle.name())?;
    writeln!(out, "extension:  {}", handle.extension())?;
    writeln!(out, "platform:   {}", handle.platform())?;
    let exists = handle.exists();
    writeln!(out, "exists:     {}", exists)?;
    if exists {
        writeln!(out, "attributes: {:?}", handle.attributes()?)?;
    }
    Ok(())
}
