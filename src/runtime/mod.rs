//! Container runtime interface: reachability probe and service invocations.
//!
//! The runtime itself (daemon, compose orchestration, toolchain image) is an
//! external collaborator; this module only constructs its command lines and
//! interprets the probe's output.

use crate::config::Config;
use crate::core::error::{Error, Result};
use serde::Deserialize;

pub mod process;

pub use process::{Captured, ProcessRunner, RunOutcome, SystemRunner};

/// Handle to the external container runtime CLI.
pub struct ContainerRuntime {
    binary: String,
    service: String,
    entrypoint: String,
    gateway_host: String,
}

/// Server block of `<binary> version --format {{json .Server}}`.
#[derive(Debug, Deserialize)]
struct ServerInfo {
    #[serde(rename = "Version")]
    version: Option<String>,
}

impl ContainerRuntime {
    /// Create a runtime handle from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            binary: config.runtime.binary.clone(),
            service: config.runtime.service.clone(),
            entrypoint: config.toolchain.entrypoint.clone(),
            gateway_host: config.runtime.gateway_host.clone(),
        }
    }

    /// Probe the runtime for reachability.
    ///
    /// Queries the server version (the runtime's own default timeout
    /// applies) and returns it when non-empty. On failure the error message
    /// carries the captured diagnostic text — or a synthetic message when
    /// the tool produced none — plus the active context name when it can be
    /// obtained.
    pub fn probe(&self, runner: &dyn ProcessRunner) -> Result<String> {
        let args = to_args(&["version", "--format", "{{json .Server}}"]);
        let captured = runner.run_captured(&self.binary, &args)?;

        if captured.success {
            if let Ok(info) = serde_json::from_str::<ServerInfo>(captured.stdout.trim()) {
                if let Some(version) = info.version.filter(|v| !v.is_empty()) {
                    return Ok(version);
                }
            }
        }

        let mut diagnostic = first_non_empty(&[&captured.stderr, &captured.stdout])
            .unwrap_or("runtime did not report a server version")
            .to_string();

        // Best effort only; a probe failure message without the context
        // name is still actionable.
        if let Ok(ctx) = runner.run_captured(&self.binary, &to_args(&["context", "show"])) {
            if ctx.success {
                if let Some(name) = first_non_empty(&[&ctx.stdout]) {
                    diagnostic.push_str(&format!(" (active context: {})", name));
                }
            }
        }

        Err(Error::runtime(diagnostic))
    }

    /// Invocation running the toolchain entrypoint in the service container.
    pub fn toolchain_invocation(&self, tool_args: &[&str]) -> (String, Vec<String>) {
        let mut args = to_args(&["compose", "run", "--rm"]);
        args.push(self.service.clone());
        args.push(self.entrypoint.clone());
        args.extend(tool_args.iter().map(|s| s.to_string()));
        (self.binary.clone(), args)
    }

    /// Invocation opening an interactive shell in the service container.
    pub fn shell_invocation(&self) -> (String, Vec<String>) {
        let mut args = to_args(&["compose", "run", "--rm"]);
        args.push(self.service.clone());
        args.push("bash".to_string());
        (self.binary.clone(), args)
    }

    /// Network serial endpoint the containerized toolchain flashes and
    /// monitors through.
    ///
    /// Fixed per configuration — independent of whatever device a bridge
    /// launch forwarded.
    pub fn serial_endpoint(&self, port: u16) -> String {
        format!(
            "rfc2217://{}:{}?ign_set_control",
            self.gateway_host, port
        )
    }
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::cell::RefCell;

    /// Fake runner with canned captured results, recording invocations.
    struct CannedRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
        results: RefCell<Vec<Captured>>,
    }

    impl CannedRunner {
        fn new(results: Vec<Captured>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                results: RefCell::new(results),
            }
        }
    }

    impl ProcessRunner for CannedRunner {
        fn run_streamed(&self, _program: &str, _args: &[String]) -> Result<RunOutcome> {
            panic!("probe must not stream");
        }

        fn run_captured(&self, program: &str, args: &[String]) -> Result<Captured> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            Ok(self.results.borrow_mut().remove(0))
        }
    }

    fn captured(stdout: &str, stderr: &str, success: bool) -> Captured {
        Captured {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code: if success { 0 } else { 1 },
            success,
        }
    }

    #[test]
    fn test_probe_parses_server_version() {
        let runtime = ContainerRuntime::new(&Config::default());
        let runner = CannedRunner::new(vec![captured(
            "{\"Platform\":{\"Name\":\"Docker Engine\"},\"Version\":\"27.3.1\"}\n",
            "",
            true,
        )]);

        let version = runtime.probe(&runner).unwrap();
        assert_eq!(version, "27.3.1");

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "docker");
        assert_eq!(calls[0].1, ["version", "--format", "{{json .Server}}"]);
    }

    #[test]
    fn test_probe_failure_uses_stderr_and_context() {
        let runtime = ContainerRuntime::new(&Config::default());
        let runner = CannedRunner::new(vec![
            captured("", "Cannot connect to the Docker daemon\n", false),
            captured("desktop-linux\n", "", true),
        ]);

        let err = runtime.probe(&runner).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Cannot connect to the Docker daemon"));
        assert!(msg.contains("active context: desktop-linux"));
    }

    #[test]
    fn test_probe_failure_synthetic_message() {
        let runtime = ContainerRuntime::new(&Config::default());
        // Exit 0 but empty output, and no context available either
        let runner = CannedRunner::new(vec![
            captured("", "", true),
            captured("", "", false),
        ]);

        let err = runtime.probe(&runner).unwrap_err();
        assert!(
            err.to_string()
                .contains("runtime did not report a server version")
        );
    }

    #[test]
    fn test_probe_rejects_empty_version_field() {
        let runtime = ContainerRuntime::new(&Config::default());
        let runner = CannedRunner::new(vec![
            captured("{\"Version\":\"\"}", "", true),
            captured("", "", false),
        ]);

        assert!(runtime.probe(&runner).is_err());
    }

    #[test]
    fn test_toolchain_invocation() {
        let runtime = ContainerRuntime::new(&Config::default());
        let (program, args) = runtime.toolchain_invocation(&["set-target", "esp32s3"]);

        assert_eq!(program, "docker");
        assert_eq!(
            args,
            [
                "compose",
                "run",
                "--rm",
                "idf",
                "idf.py",
                "set-target",
                "esp32s3"
            ]
        );
    }

    #[test]
    fn test_shell_invocation() {
        let runtime = ContainerRuntime::new(&Config::default());
        let (program, args) = runtime.shell_invocation();

        assert_eq!(program, "docker");
        assert_eq!(args, ["compose", "run", "--rm", "idf", "bash"]);
    }

    #[test]
    fn test_serial_endpoint() {
        let runtime = ContainerRuntime::new(&Config::default());
        assert_eq!(
            runtime.serial_endpoint(4000),
            "rfc2217://host.docker.internal:4000?ign_set_control"
        );
    }

    #[test]
    fn test_invocations_follow_config() {
        let mut config = Config::default();
        config.runtime.binary = "podman".to_string();
        config.runtime.service = "esp".to_string();
        config.toolchain.entrypoint = "idf.sh".to_string();
        config.runtime.gateway_host = "10.0.2.2".to_string();

        let runtime = ContainerRuntime::new(&config);
        let (program, args) = runtime.toolchain_invocation(&["build"]);
        assert_eq!(program, "podman");
        assert_eq!(args, ["compose", "run", "--rm", "esp", "idf.sh", "build"]);
        assert_eq!(
            runtime.serial_endpoint(4001),
            "rfc2217://10.0.2.2:4001?ign_set_control"
        );
    }
}
