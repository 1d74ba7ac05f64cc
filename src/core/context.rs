use crate::config::Config;
use crate::core::error::{Error, Result};
use std::path::PathBuf;

/// Context object that carries state through a dispatch invocation.
///
/// The working directory is passed in explicitly rather than read from the
/// ambient process state, so callers (and tests) control where project
/// scaffolding and compose invocations happen.
pub struct Context {
    /// Configuration.
    pub config: Config,

    /// Working directory containing the project and compose file.
    pub workdir: PathBuf,
}

impl Context {
    /// Create a new context from configuration and working directory.
    pub fn new(config: Config, workdir: PathBuf) -> Result<Self> {
        if !workdir.is_dir() {
            return Err(Error::config(format!(
                "working directory does not exist: {}",
                workdir.display()
            )));
        }

        Ok(Self { config, workdir })
    }

    /// Whether verbose output is enabled.
    pub fn verbose(&self) -> bool {
        self.config.verbose
    }

    /// Path of the scaffold directory the toolchain creates for a project.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.workdir.join(name)
    }
}
