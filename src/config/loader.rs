use super::Config;
use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the configuration file discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = "idf-runner.toml";

/// Configuration loader that supports multiple sources.
pub struct ConfigLoader {
    /// Working directory searched for `idf-runner.toml`.
    workdir: Option<PathBuf>,
    /// Path to an explicit config file.
    config_file: Option<PathBuf>,
    /// Whether to apply `IDF_RUNNER_*` env var overrides.
    use_env: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            workdir: None,
            config_file: None,
            use_env: true,
        }
    }

    /// Set the working directory to search for a config file.
    pub fn workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Set an explicit configuration file path.
    ///
    /// Takes precedence over a discovered `idf-runner.toml`; the file must
    /// exist.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Disable `IDF_RUNNER_*` environment overrides.
    pub fn no_env_overrides(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Load configuration from all enabled sources.
    ///
    /// Priority (later sources override earlier):
    /// 1. Default values
    /// 2. `idf-runner.toml` in the working directory (if present)
    /// 3. Explicit config file
    /// 4. Individual env var overrides (`IDF_RUNNER_*`)
    pub fn load(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(ref workdir) = self.workdir {
            let discovered = workdir.join(CONFIG_FILE_NAME);
            if discovered.is_file() {
                config = Self::read_file(&discovered)?;
            }
        }

        if let Some(ref path) = self.config_file {
            if !path.is_file() {
                return Err(Error::FileNotFound(path.clone()));
            }
            config = Self::read_file(path)?;
        }

        if self.use_env {
            super::env::apply_env_overrides(&mut config);
        }

        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Config> {
        Config::from_toml_file(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
