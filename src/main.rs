use dirhandle::{
    cli::{get_log_level_from_verbose, parse_cli, resolve_config, run},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let config = match resolve_config(cli.command.common()) {
        Ok(config) => config,
        Err(err) => return default_error_handler(err),
    };

    let lvl = get_log_level_from_verbose(config.verbose());
    env_logger::Builder::new().filter_level(lvl).init();

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(&cli.command, &config, &mut stdout) {
        default_error_handler(err);
    }
}
