//! Interactive input for arguments omitted on the command line.

use crate::core::error::{Error, Result};
use std::io::Write;

/// Capability for asking the operator a question.
///
/// Isolated behind a trait so tests can supply canned answers.
pub trait InputProvider {
    /// Prompt with `message` and return the answer.
    ///
    /// An empty answer is returned as-is; the downstream toolchain owns
    /// validation of names, targets and device paths.
    fn prompt(&mut self, message: &str) -> Result<String>;
}

/// Reads answers from the process's standard input.
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn prompt(&mut self, message: &str) -> Result<String> {
        print!("{message}: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .map_err(|e| Error::prompt(format!("failed to read from stdin: {e}")))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
