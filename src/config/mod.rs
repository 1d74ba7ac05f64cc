//! Configuration types and loading for the containerized workflow.

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod env;
mod loader;
pub use loader::ConfigLoader;

/// Complete configuration for the workflow runner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Container runtime configuration.
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Toolchain entrypoint configuration.
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    /// Serial bridge configuration.
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Enable verbose output (echo external commands before running them).
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from a standalone TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Container runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Container runtime CLI binary.
    #[serde(default = "default_runtime_binary")]
    pub binary: String,

    /// Compose service that carries the toolchain.
    #[serde(default = "default_service")]
    pub service: String,

    /// Hostname under which the container reaches the host machine.
    #[serde(default = "default_gateway_host", rename = "gateway-host")]
    pub gateway_host: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: default_runtime_binary(),
            service: default_service(),
            gateway_host: default_gateway_host(),
        }
    }
}

/// Toolchain entrypoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Program invoked inside the service container for toolchain actions.
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            entrypoint: default_entrypoint(),
        }
    }
}

/// Serial bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Directory the bridge tool is installed into.
    #[serde(default = "default_bridge_dir", rename = "install-dir")]
    pub install_dir: PathBuf,

    /// Installer script that provisions the bridge tool.
    #[serde(default = "default_bridge_installer")]
    pub installer: PathBuf,

    /// TCP port the bridge listens on; flash and monitor target the same port.
    #[serde(default = "default_bridge_port")]
    pub port: u16,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            install_dir: default_bridge_dir(),
            installer: default_bridge_installer(),
            port: default_bridge_port(),
        }
    }
}

fn default_runtime_binary() -> String {
    "docker".to_string()
}

fn default_service() -> String {
    "idf".to_string()
}

fn default_gateway_host() -> String {
    "host.docker.internal".to_string()
}

fn default_entrypoint() -> String {
    "idf.py".to_string()
}

fn default_bridge_port() -> u16 {
    4000
}

/// Per-user data directory for the runner's own tooling.
fn tool_home() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".idf-runner")
}

fn default_bridge_dir() -> PathBuf {
    tool_home().join("esp-rfc2217-server")
}

fn default_bridge_installer() -> PathBuf {
    tool_home().join("install-esp-rfc2217-server.sh")
}
