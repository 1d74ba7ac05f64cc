//! Configuration loading: TOML parsing, file discovery, and override
//! priority across sources.

use idf_runner::config::{Config, ConfigLoader};
use std::path::PathBuf;
use std::sync::Mutex;

#[test]
fn test_full_config_parsing() {
    let toml_str = r#"
verbose = true

[runtime]
binary = "podman"
service = "esp-idf"
gateway-host = "10.0.2.2"

[toolchain]
entrypoint = "idf.sh"

[bridge]
install-dir = "/opt/esp-rfc2217-server"
installer = "/opt/install.sh"
port = 4010
"#;
    let config = Config::from_toml_str(toml_str).unwrap();

    assert!(config.verbose);
    assert_eq!(config.runtime.binary, "podman");
    assert_eq!(config.runtime.service, "esp-idf");
    assert_eq!(config.runtime.gateway_host, "10.0.2.2");
    assert_eq!(config.toolchain.entrypoint, "idf.sh");
    assert_eq!(
        config.bridge.install_dir,
        PathBuf::from("/opt/esp-rfc2217-server")
    );
    assert_eq!(config.bridge.installer, PathBuf::from("/opt/install.sh"));
    assert_eq!(config.bridge.port, 4010);
}

#[test]
fn test_loader_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("idf-runner.toml"),
        r#"
[bridge]
port = 4001
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .workdir(dir.path())
        .no_env_overrides()
        .load()
        .unwrap();

    assert_eq!(config.bridge.port, 4001);
    // Untouched sections keep their defaults
    assert_eq!(config.runtime.service, "idf");
}

#[test]
fn test_env_overrides_file() {
    // Env vars are process-global; serialize with any other test that sets them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());
    let _guard = ENV_LOCK.lock().unwrap();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("idf-runner.toml"),
        "[runtime]\nservice = \"from-file\"\n",
    )
    .unwrap();

    let key = "IDF_RUNNER_SERVICE";
    let old = std::env::var(key).ok();
    // SAFETY: test is serialized via ENV_LOCK
    unsafe { std::env::set_var(key, "from-env") };

    let config = ConfigLoader::new().workdir(dir.path()).load().unwrap();
    assert_eq!(config.runtime.service, "from-env");

    // SAFETY: test is serialized via ENV_LOCK
    match old {
        Some(v) => unsafe { std::env::set_var(key, v) },
        None => unsafe { std::env::remove_var(key) },
    }
}

#[test]
fn test_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[toolchain]\nentrypoint = \"idf.py\"\n").unwrap();

    let config = Config::from_toml_file(&path).unwrap();
    assert_eq!(config.toolchain.entrypoint, "idf.py");
}
