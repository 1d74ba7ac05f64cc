//! The fixed command set accepted by the dispatcher.

/// A parsed invocation: a workflow action, the help request, or input that
/// matched neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One of the workflow actions.
    Action(Action),
    /// Print usage text.
    Help,
    /// Input outside the fixed command set; falls back to usage output.
    Unrecognized(String),
}

/// Workflow actions that spawn an external process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Scaffold a new project, then hoist it into the working directory.
    CreateProject,
    /// Select the target chip for the project.
    SetTarget,
    /// Open the project configuration menu.
    Menuconfig,
    /// Build the project.
    Build,
    /// Open an interactive shell in the toolchain container.
    Bash,
    /// Expose a local serial device over RFC2217.
    Rfc2217Server,
    /// Flash the built firmware over the bridge.
    Flash,
    /// Attach the serial monitor over the bridge.
    Monitor,
}

impl Command {
    /// Parse a raw command name.
    ///
    /// Anything outside the fixed set becomes [`Command::Unrecognized`];
    /// validation of the *argument* is left to the downstream toolchain.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "create-project" => Command::Action(Action::CreateProject),
            "set-target" => Command::Action(Action::SetTarget),
            "menuconfig" => Command::Action(Action::Menuconfig),
            "build" => Command::Action(Action::Build),
            "bash" => Command::Action(Action::Bash),
            "esp_rfc2217_server" => Command::Action(Action::Rfc2217Server),
            "flash" => Command::Action(Action::Flash),
            "monitor" => Command::Action(Action::Monitor),
            "help" => Command::Help,
            other => Command::Unrecognized(other.to_string()),
        }
    }
}

impl Action {
    /// Prompt label for actions whose argument may be supplied
    /// interactively, `None` for actions that take no argument.
    pub fn argument_prompt(self) -> Option<&'static str> {
        match self {
            Action::CreateProject => Some("Project name"),
            Action::SetTarget => Some("Target chip"),
            Action::Rfc2217Server => Some("Serial device"),
            _ => None,
        }
    }
}

/// Static usage text covering every command.
pub fn help_text() -> &'static str {
    "\
usage: idf-runner <command> [argument]

Commands:
  create-project <name>        Create a new project from the toolchain template
  set-target <chip>            Select the target chip (e.g. esp32, esp32s3)
  menuconfig                   Open the project configuration menu
  build                        Build the project
  bash                         Open an interactive shell in the toolchain container
  esp_rfc2217_server <device>  Expose a local serial device over RFC2217 (TCP port 4000)
  flash                        Flash the built firmware over the RFC2217 bridge
  monitor                      Attach the serial monitor over the RFC2217 bridge
  help                         Show this help
"
}
