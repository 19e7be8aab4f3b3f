use std::process::ExitCode;

use clap::Parser;
use outlay::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use outlay::adapter::inbound::cli::output::{self, OutputConfig};
use outlay::adapter::inbound::cli::{config, project, solve};
use outlay::error::Result;
use outlay::infrastructure::config::settings::Config;

/// Exit code for rejected input (bad catalog, budget or period).
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        &cli.color,
    ));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err.to_string());
            if err.is_invalid_input() {
                ExitCode::from(EXIT_INVALID_INPUT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (path, explicit) = cli.config_path();

    match &cli.command {
        Commands::Solve(args) => {
            let config = load(&path, explicit)?;
            solve::execute(args, &config)
        }
        Commands::Project(args) => {
            let config = load(&path, explicit)?;
            project::execute(args, &config)
        }
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show) => {
            let config = config::load(&path, explicit)?;
            config::execute_show(&config, &path)
        }
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&path),
    }
}

/// Load configuration and start logging. `-v` raises and `-q` lowers the
/// configured level.
fn load(path: &std::path::Path, explicit: bool) -> Result<Config> {
    let mut config = config::load(path, explicit)?;
    if let Some(level) = output::log_level() {
        config.logging.level = level.to_string();
    }
    config.init_logging();
    Ok(config)
}
