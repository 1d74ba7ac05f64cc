use clap::Parser;
use idf_runner::cli::Cli;
use idf_runner::runtime::RunOutcome;
use idf_runner::{Command, ConfigLoader, Context, Dispatcher, Result};
use std::process::exit;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => {
            if !outcome.success {
                exit(outcome.exit_code);
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<RunOutcome> {
    let workdir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut loader = ConfigLoader::new().workdir(&workdir);
    if let Some(path) = cli.config {
        loader = loader.config_file(path);
    }
    let mut config = loader.load()?;
    if cli.verbose {
        config.verbose = true;
    }

    let context = Context::new(config, workdir)?;
    let mut dispatcher = Dispatcher::new(context);

    let command = match cli.command {
        Some(ref raw) => Command::parse(raw),
        None => Command::Help,
    };

    dispatcher.dispatch(command, cli.argument)
}
