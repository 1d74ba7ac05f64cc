//! Environment variable processing for runtime configuration overrides.
//!
//! Env var prefix: `IDF_RUNNER_`
//!
//! - `IDF_RUNNER_RUNTIME_BINARY` — override the container runtime CLI
//! - `IDF_RUNNER_SERVICE` — override the compose service name
//! - `IDF_RUNNER_GATEWAY_HOST` — override the container-to-host gateway name
//! - `IDF_RUNNER_ENTRYPOINT` — override the toolchain entrypoint program
//! - `IDF_RUNNER_BRIDGE_DIR` — override the bridge install directory
//! - `IDF_RUNNER_BRIDGE_INSTALLER` — override the bridge installer script
//! - `IDF_RUNNER_BRIDGE_PORT` — override the bridge TCP port
//! - `IDF_RUNNER_VERBOSE` — enable verbose output (1/true/yes)

use super::Config;
use std::path::PathBuf;

const PREFIX: &str = "IDF_RUNNER_";

/// Apply individual env var overrides to a config.
///
/// Each override is applied only if the env var is set and parses correctly.
/// Invalid values are silently ignored.
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(val) = env_str("RUNTIME_BINARY") {
        config.runtime.binary = val;
    }

    if let Some(val) = env_str("SERVICE") {
        config.runtime.service = val;
    }

    if let Some(val) = env_str("GATEWAY_HOST") {
        config.runtime.gateway_host = val;
    }

    if let Some(val) = env_str("ENTRYPOINT") {
        config.toolchain.entrypoint = val;
    }

    if let Some(val) = env_str("BRIDGE_DIR") {
        config.bridge.install_dir = PathBuf::from(val);
    }

    if let Some(val) = env_str("BRIDGE_INSTALLER") {
        config.bridge.installer = PathBuf::from(val);
    }

    if let Some(val) = env_parse::<u16>("BRIDGE_PORT") {
        config.bridge.port = val;
    }

    if let Some(val) = env_bool("VERBOSE") {
        config.verbose = val;
    }
}

// --- helpers ---

fn env_str(suffix: &str) -> Option<String> {
    std::env::var(format!("{PREFIX}{suffix}"))
        .ok()
        .filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(suffix: &str) -> Option<T> {
    env_str(suffix).and_then(|s| s.parse().ok())
}

fn env_bool(suffix: &str) -> Option<bool> {
    env_str(suffix).map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
}
