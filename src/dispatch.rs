//! Top-level command dispatch: argument resolution, runtime gate, and
//! execution of the single external action each command maps to.

use crate::bridge::SerialBridge;
use crate::command::{Action, Command, help_text};
use crate::core::context::Context;
use crate::core::error::Result;
use crate::input::{InputProvider, StdinInput};
use crate::runtime::{ContainerRuntime, ProcessRunner, RunOutcome, SystemRunner};
use crate::util::fs::hoist_dir_contents;

/// Command dispatcher for the containerized workflow.
///
/// Owns the process-runner and input-provider capabilities so both can be
/// replaced in tests.
pub struct Dispatcher {
    context: Context,
    runtime: ContainerRuntime,
    bridge: SerialBridge,
    runner: Box<dyn ProcessRunner>,
    input: Box<dyn InputProvider>,
}

impl Dispatcher {
    /// Create a dispatcher that spawns real processes in the context's
    /// working directory and prompts on stdin.
    pub fn new(context: Context) -> Self {
        let runtime = ContainerRuntime::new(&context.config);
        let bridge = SerialBridge::new(&context.config.bridge);
        let runner = SystemRunner::new(context.workdir.clone());

        Self {
            context,
            runtime,
            bridge,
            runner: Box::new(runner),
            input: Box::new(StdinInput),
        }
    }

    /// Replace the process runner.
    pub fn with_runner(mut self, runner: Box<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Replace the input provider.
    pub fn with_input(mut self, input: Box<dyn InputProvider>) -> Self {
        self.input = input;
        self
    }

    /// Dispatch one command.
    ///
    /// `help` and unrecognized input print usage and return without
    /// touching the container runtime. Everything else passes the
    /// reachability gate first; a probe failure aborts before any
    /// subcommand executor runs.
    pub fn dispatch(&mut self, command: Command, argument: Option<String>) -> Result<RunOutcome> {
        match command {
            Command::Help => {
                print!("{}", help_text());
                Ok(RunOutcome::success())
            }
            Command::Unrecognized(name) => {
                eprintln!("unknown command: {name}");
                print!("{}", help_text());
                Ok(RunOutcome::failed(2))
            }
            Command::Action(action) => {
                let argument = self.resolve_argument(action, argument)?;

                let version = self.runtime.probe(self.runner.as_ref())?;
                if self.context.verbose() {
                    println!("Container runtime server {version}");
                }

                self.execute(action, argument)
            }
        }
    }

    /// Supply the argument, prompting exactly once when the action needs
    /// one and none was given. Empty answers pass through unchanged.
    fn resolve_argument(
        &mut self,
        action: Action,
        argument: Option<String>,
    ) -> Result<Option<String>> {
        match (action.argument_prompt(), argument) {
            (Some(label), None) => Ok(Some(self.input.prompt(label)?)),
            (_, argument) => Ok(argument),
        }
    }

    fn execute(&mut self, action: Action, argument: Option<String>) -> Result<RunOutcome> {
        match action {
            Action::CreateProject => {
                let name = argument.unwrap_or_default();
                let (program, args) = self.runtime.toolchain_invocation(&["create-project", &name]);
                let outcome = self.run_streamed(&program, &args)?;
                if outcome.success {
                    hoist_dir_contents(&self.context.project_dir(&name), &self.context.workdir)?;
                }
                Ok(outcome)
            }
            Action::SetTarget => {
                let chip = argument.unwrap_or_default();
                let (program, args) = self.runtime.toolchain_invocation(&["set-target", &chip]);
                self.run_streamed(&program, &args)
            }
            Action::Menuconfig => {
                let (program, args) = self.runtime.toolchain_invocation(&["menuconfig"]);
                self.run_streamed(&program, &args)
            }
            Action::Build => {
                let (program, args) = self.runtime.toolchain_invocation(&["build"]);
                self.run_streamed(&program, &args)
            }
            Action::Bash => {
                let (program, args) = self.runtime.shell_invocation();
                self.run_streamed(&program, &args)
            }
            Action::Rfc2217Server => {
                let device = argument.unwrap_or_default();
                self.bridge.ensure_installed(self.runner.as_ref())?;
                let (program, args) = self.bridge.launch_invocation(&device);
                self.run_streamed(&program, &args)
            }
            Action::Flash => {
                let endpoint = self.runtime.serial_endpoint(self.bridge.port());
                let (program, args) =
                    self.runtime.toolchain_invocation(&["flash", "--port", &endpoint]);
                self.run_streamed(&program, &args)
            }
            Action::Monitor => {
                let endpoint = self.runtime.serial_endpoint(self.bridge.port());
                let (program, args) =
                    self.runtime
                        .toolchain_invocation(&["monitor", "--port", &endpoint]);
                self.run_streamed(&program, &args)
            }
        }
    }

    fn run_streamed(&self, program: &str, args: &[String]) -> Result<RunOutcome> {
        if self.context.verbose() {
            println!("Executing: {} {}", program, args.join(" "));
        }
        self.runner.run_streamed(program, args)
    }
}
