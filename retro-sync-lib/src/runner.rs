//! External command execution.
//!
//! Every transfer is delegated to an external program (`rsync`, `ssh`).
//! [`CommandRunner`] is the seam between building a command and running
//! it, so dry runs and tests never spawn anything.

use std::process::{Command, Stdio};

use crate::error::SyncError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Arg {
    value: String,
    quoted: bool,
}

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<Arg>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument shown bare in [`display`](Self::display).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg {
            value: arg.into(),
            quoted: false,
        });
        self
    }

    /// Add an argument shown in double quotes in [`display`](Self::display).
    pub fn quoted_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg {
            value: arg.into(),
            quoted: true,
        });
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(|a| a.value.as_str()).collect()
    }

    /// Shell-style rendering for logs, e.g. `rsync -avP "src/" "dst"`.
    ///
    /// Quoting is cosmetic: arguments are passed to the program verbatim.
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            if arg.quoted {
                out.push('"');
                out.push_str(&arg.value);
                out.push('"');
            } else {
                out.push_str(&arg.value);
            }
        }
        out
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// How a command run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    /// Non-zero exit; `None` when terminated by a signal.
    Failed(Option<i32>),
    /// Not executed (dry run).
    Skipped,
}

/// Runs (or pretends to run) external commands.
pub trait CommandRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<RunOutcome, SyncError>;
}

/// Spawns commands with inherited stdio so rsync progress reaches the
/// terminal directly.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<RunOutcome, SyncError> {
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|e| SyncError::spawn(command.program(), e))?;
        if status.success() {
            Ok(RunOutcome::Success)
        } else {
            Ok(RunOutcome::Failed(status.code()))
        }
    }
}

/// Never spawns anything.
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<RunOutcome, SyncError> {
        log::debug!("dry run, not executing: {}", command.program());
        Ok(RunOutcome::Skipped)
    }
}

/// Records every command and reports a fixed outcome.
#[derive(Debug)]
pub struct RecordingRunner {
    pub commands: Vec<CommandSpec>,
    outcome: RunOutcome,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::with_outcome(RunOutcome::Success)
    }

    pub fn with_outcome(outcome: RunOutcome) -> Self {
        Self {
            commands: Vec::new(),
            outcome,
        }
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<RunOutcome, SyncError> {
        self.commands.push(command.clone());
        Ok(self.outcome)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&mut self, command: &CommandSpec) -> Result<RunOutcome, SyncError> {
        (**self).run(command)
    }
}

/// Run `command` to completion and return its stdout.
///
/// Stderr stays attached to the terminal so prompts and errors from the
/// program remain visible.
pub fn capture_stdout(command: &CommandSpec) -> Result<(RunOutcome, String), SyncError> {
    let output = Command::new(command.program())
        .args(command.args())
        .stdin(Stdio::inherit())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| SyncError::spawn(command.program(), e))?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let outcome = if output.status.success() {
        RunOutcome::Success
    } else {
        RunOutcome::Failed(output.status.code())
    };
    Ok((outcome, stdout))
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod tests;
