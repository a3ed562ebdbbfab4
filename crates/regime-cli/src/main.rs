//! Regime column config inspector.

use clap::Parser;
use regime_cli::commands::{load_config, run_check, run_role, run_show};
use regime_cli::logging::init_logging;

mod cli;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    // `check` reports issues itself, so it loads the config unvalidated.
    let validate = !matches!(cli.command, Command::Check);
    let outcome = load_config(cli.config.as_deref(), validate).and_then(|config| {
        match &cli.command {
            Command::Show(args) => run_show(&config, args.format).map(|()| true),
            Command::Check => run_check(&config),
            Command::Role(args) => run_role(&config, &args.columns),
        }
    });
    let exit_code = match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
