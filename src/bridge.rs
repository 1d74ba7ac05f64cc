//! Local serial-to-RFC2217 bridge: install bootstrap and launch invocation.
//!
//! The bridge binary and its installer are external collaborators. This
//! module only decides whether the installer needs to run and builds the
//! launch command line.

use crate::config::BridgeConfig;
use crate::core::error::{Error, Result};
use crate::runtime::ProcessRunner;
use std::path::{Path, PathBuf};

/// Name of the bridge executable inside the install directory.
const BRIDGE_EXECUTABLE: &str = "esp_rfc2217_server";

/// The serial bridge tool and its install location.
pub struct SerialBridge {
    install_dir: PathBuf,
    installer: PathBuf,
    port: u16,
}

impl SerialBridge {
    /// Create a bridge handle from configuration.
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            install_dir: config.install_dir.clone(),
            installer: config.installer.clone(),
            port: config.port,
        }
    }

    /// Whether the bridge tool is installed.
    pub fn is_installed(&self) -> bool {
        self.install_dir.exists()
    }

    /// The TCP port the bridge listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path of the bridge executable.
    pub fn executable(&self) -> PathBuf {
        self.install_dir.join(BRIDGE_EXECUTABLE)
    }

    /// Ensure the bridge tool is present, running the installer if needed.
    ///
    /// Succeeds without side effects when the install directory already
    /// exists. Otherwise the installer script runs (streamed, so the
    /// operator sees its output) and the directory is re-checked; the
    /// installer's exit code is not interpreted beyond that re-check.
    pub fn ensure_installed(&self, runner: &dyn ProcessRunner) -> Result<()> {
        if self.is_installed() {
            return Ok(());
        }

        if !self.installer.exists() {
            return Err(Error::bridge(format!(
                "installer not found: {}",
                self.installer.display()
            )));
        }

        println!(
            "Installing {} to {}...",
            BRIDGE_EXECUTABLE,
            self.install_dir.display()
        );
        runner.run_streamed(&path_arg(&self.installer), &[])?;

        if !self.is_installed() {
            return Err(Error::bridge(format!(
                "install failed: {} still missing after running {}",
                self.install_dir.display(),
                self.installer.display()
            )));
        }

        Ok(())
    }

    /// Invocation launching the bridge bound to the configured port,
    /// forwarding `device`, verbosely.
    pub fn launch_invocation(&self, device: &str) -> (String, Vec<String>) {
        (
            path_arg(&self.executable()),
            vec![
                "-v".to_string(),
                "-p".to_string(),
                self.port.to_string(),
                device.to_string(),
            ],
        )
    }
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{Captured, RunOutcome};
    use std::cell::RefCell;

    /// Fake runner recording streamed invocations; optionally creates the
    /// install directory as a side effect, like a real installer would.
    struct InstallerRunner {
        calls: RefCell<Vec<String>>,
        creates: Option<PathBuf>,
    }

    impl InstallerRunner {
        fn new(creates: Option<PathBuf>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                creates,
            }
        }
    }

    impl ProcessRunner for InstallerRunner {
        fn run_streamed(&self, program: &str, _args: &[String]) -> Result<RunOutcome> {
            self.calls.borrow_mut().push(program.to_string());
            if let Some(ref dir) = self.creates {
                std::fs::create_dir_all(dir).unwrap();
            }
            Ok(RunOutcome::success())
        }

        fn run_captured(&self, _program: &str, _args: &[String]) -> Result<Captured> {
            panic!("bootstrap must not capture");
        }
    }

    fn bridge_in(dir: &Path) -> SerialBridge {
        SerialBridge::new(&BridgeConfig {
            install_dir: dir.join("esp-rfc2217-server"),
            installer: dir.join("install.sh"),
            port: 4000,
        })
    }

    #[test]
    fn test_installed_skips_installer() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = bridge_in(dir.path());
        std::fs::create_dir_all(dir.path().join("esp-rfc2217-server")).unwrap();

        let runner = InstallerRunner::new(None);
        bridge.ensure_installed(&runner).unwrap();
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_installer_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = bridge_in(dir.path());

        let runner = InstallerRunner::new(None);
        let err = bridge.ensure_installed(&runner).unwrap_err();
        assert!(err.to_string().contains("installer not found"));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_installer_runs_and_recheck_passes() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = bridge_in(dir.path());
        std::fs::write(dir.path().join("install.sh"), "#!/bin/sh\n").unwrap();

        let runner = InstallerRunner::new(Some(dir.path().join("esp-rfc2217-server")));
        bridge.ensure_installed(&runner).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], dir.path().join("install.sh").display().to_string());
    }

    #[test]
    fn test_install_failure_reported_after_recheck() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = bridge_in(dir.path());
        std::fs::write(dir.path().join("install.sh"), "#!/bin/sh\n").unwrap();

        // Installer runs but never creates the directory
        let runner = InstallerRunner::new(None);
        let err = bridge.ensure_installed(&runner).unwrap_err();
        assert!(err.to_string().contains("install failed"));
    }

    #[test]
    fn test_launch_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = bridge_in(dir.path());

        let (program, args) = bridge.launch_invocation("/dev/ttyUSB0");
        assert_eq!(
            program,
            dir.path()
                .join("esp-rfc2217-server")
                .join("esp_rfc2217_server")
                .display()
                .to_string()
        );
        assert_eq!(args, ["-v", "-p", "4000", "/dev/ttyUSB0"]);
    }
}
