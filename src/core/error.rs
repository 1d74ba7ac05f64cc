use std::path::PathBuf;

/// Result type alias for idf-runner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for idf-runner.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Container runtime reachability errors.
    #[error("Container runtime unavailable: {0}")]
    Runtime(String),

    /// External process execution errors.
    #[error("Process error: {0}")]
    Process(String),

    /// Serial bridge bootstrap errors.
    #[error("Serial bridge error: {0}")]
    Bridge(String),

    /// Interactive prompt errors.
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// File not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a container runtime error.
    pub fn runtime(msg: impl Into<String>) -> Self {
        Error::Runtime(msg.into())
    }

    /// Create a process execution error.
    pub fn process(msg: impl Into<String>) -> Self {
        Error::Process(msg.into())
    }

    /// Create a serial bridge error.
    pub fn bridge(msg: impl Into<String>) -> Self {
        Error::Bridge(msg.into())
    }

    /// Create a prompt error.
    pub fn prompt(msg: impl Into<String>) -> Self {
        Error::Prompt(msg.into())
    }
}
