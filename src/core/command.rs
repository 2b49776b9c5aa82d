use std::path::PathBuf;
use std::process::Command;

use crate::error::{CommandFailedDetails, Error, Result};
use crate::log_status;

/// One external toolchain invocation.
///
/// `Exec` runs the program directly (no shell). `Shell` hands the
/// line to `sh -c` (`cmd /C` on Windows) for commands that need
/// shell features.
#[derive(Debug, Clone)]
pub struct CommandStep {
    pub invocation: Invocation,
    pub working_dir: Option<PathBuf>,
    pub label: String,
}

#[derive(Debug, Clone)]
pub enum Invocation {
    Exec { program: String, args: Vec<String> },
    Shell(String),
}

impl CommandStep {
    pub fn exec(label: impl Into<String>, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            invocation: Invocation::Exec {
                program: program.into(),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
            working_dir: None,
            label: label.into(),
        }
    }

    pub fn shell(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            invocation: Invocation::Shell(command.into()),
            working_dir: None,
            label: label.into(),
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Display form for diagnostics.
    pub fn command_line(&self) -> String {
        match &self.invocation {
            Invocation::Exec { program, args } => {
                let mut parts = vec![program.clone()];
                parts.extend(args.iter().cloned());
                parts.join(" ")
            }
            Invocation::Shell(line) => line.clone(),
        }
    }
}

/// Captured result of one step.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// Seam between the generator and the real toolchain. Tests swap in
/// a recording fake; production uses [`SystemRunner`].
pub trait CommandRunner {
    fn run(&self, step: &CommandStep) -> Result<CommandOutput>;
}

/// Runs steps as real child processes, blocking until each exits.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, step: &CommandStep) -> Result<CommandOutput> {
        let mut cmd = match &step.invocation {
            Invocation::Exec { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
            Invocation::Shell(line) => shell_command(line),
        };

        if let Some(dir) = &step.working_dir {
            cmd.current_dir(dir);
        }

        let out = cmd.output().map_err(|e| {
            Error::command_failed(CommandFailedDetails {
                command: step.command_line(),
                exit_code: None,
                working_dir: step
                    .working_dir
                    .as_ref()
                    .map(|d| d.display().to_string()),
                stderr: format!("failed to launch: {}", e),
            })
        })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            success: out.status.success(),
            exit_code: out.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", line]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", line]);
    cmd
}

/// Execute steps strictly in order, aborting on the first failure.
///
/// The failing step's command line, exit code, working directory and
/// captured stderr are reported; later steps never run.
pub fn run_steps(runner: &dyn CommandRunner, steps: &[CommandStep]) -> Result<()> {
    for step in steps {
        log_status!("toolchain", "Running: {}", step.command_line());

        let output = runner.run(step)?;
        if !output.success {
            return Err(Error::command_failed(CommandFailedDetails {
                command: step.command_line(),
                exit_code: Some(output.exit_code),
                working_dir: step
                    .working_dir
                    .as_ref()
                    .map(|d| d.display().to_string()),
                stderr: output.stderr,
            }));
        }
    }

    Ok(())
}
