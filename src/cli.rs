//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "idf-runner",
    version,
    about = "Containerized ESP-IDF workflow runner"
)]
pub struct Cli {
    /// Command to run (see `idf-runner help` for the full list)
    pub command: Option<String>,

    /// Command argument: project name, target chip, or serial device
    pub argument: Option<String>,

    /// Working directory containing the project and compose file
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Configuration file (defaults to idf-runner.toml in the working directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Echo each external command before running it
    #[arg(short, long)]
    pub verbose: bool,
}
