//! idf-runner: a containerized ESP-IDF workflow runner.
//!
//! This library dispatches a fixed set of workflow commands — project
//! creation, target selection, configuration, build, shell access, serial
//! bridging, flashing, monitoring — to an external container runtime and to
//! a local serial-to-RFC2217 bridge. The toolchain image, the container
//! runtime and the bridge binary are external collaborators; the dispatcher
//! sequences their process lifetimes and path setup.
//!
//! # Quick Start
//!
//! ```no_run
//! use idf_runner::{Command, ConfigLoader, Context, Dispatcher};
//!
//! # fn main() -> idf_runner::Result<()> {
//! let workdir = std::env::current_dir()?;
//! let config = ConfigLoader::new().workdir(&workdir).load()?;
//! let mut dispatcher = Dispatcher::new(Context::new(config, workdir)?);
//!
//! let outcome = dispatcher.dispatch(Command::parse("build"), None)?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! An optional `idf-runner.toml` in the working directory (or a file passed
//! via `--config`), overridable per-field through `IDF_RUNNER_*` env vars:
//!
//! ```toml
//! [runtime]
//! binary = "docker"
//! service = "idf"
//! gateway-host = "host.docker.internal"
//!
//! [toolchain]
//! entrypoint = "idf.py"
//!
//! [bridge]
//! port = 4000
//! ```
//!
//! # Architecture
//!
//! Two capabilities are modeled as traits so every external interaction is
//! testable without side effects:
//!
//! - [`ProcessRunner`](runtime::ProcessRunner): spawns external programs
//!   (streamed or captured)
//! - [`InputProvider`](input::InputProvider): prompts for arguments omitted
//!   on the command line
//!
//! [`Dispatcher`](dispatch::Dispatcher) wires them to the
//! [`ContainerRuntime`](runtime::ContainerRuntime) interface and the
//! [`SerialBridge`](bridge::SerialBridge) bootstrapper.

pub mod bridge;
#[cfg(feature = "cli")]
pub mod cli;
pub mod command;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod input;
pub mod runtime;
pub mod util;

// Re-export commonly used types
pub use crate::command::{Action, Command, help_text};
pub use crate::config::{Config, ConfigLoader};
pub use crate::core::{Context, Error, Result};
pub use crate::dispatch::Dispatcher;
pub use crate::input::{InputProvider, StdinInput};
pub use crate::runtime::{ProcessRunner, RunOutcome, SystemRunner};
