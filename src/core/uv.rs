//! uv toolchain boundary: step builders and availability probe.

use std::path::Path;

use crate::command::{CommandRunner, CommandStep};
use crate::defaults::RUNTIME_PACKAGES;
use crate::error::{Error, Result};

/// Fail fast when uv is not installed, before any filesystem state is
/// created.
pub fn ensure_available(runner: &dyn CommandRunner) -> Result<()> {
    let probe = CommandStep::exec("uv version probe", "uv", &["--version"]);
    match runner.run(&probe) {
        Ok(out) if out.success => Ok(()),
        _ => Err(Error::toolchain_missing("uv")),
    }
}

/// `uv init --package <slug>` run from the parent directory.
pub fn init_step(parent_dir: &Path, project_slug: &str) -> CommandStep {
    CommandStep::exec("uv init", "uv", &["init", "--package", project_slug]).in_dir(parent_dir)
}

/// `uv venv` inside the project directory.
pub fn venv_step(project_dir: &Path) -> CommandStep {
    CommandStep::exec("uv venv", "uv", &["venv"]).in_dir(project_dir)
}

/// `uv add <runtime packages>` inside the project directory.
pub fn add_step(project_dir: &Path) -> CommandStep {
    let mut args = vec!["add"];
    args.extend(RUNTIME_PACKAGES);
    CommandStep::exec("uv add", "uv", &args).in_dir(project_dir)
}

/// `uv sync` inside the project directory.
pub fn sync_step(project_dir: &Path) -> CommandStep {
    CommandStep::exec("uv sync", "uv", &["sync"]).in_dir(project_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::RecordingRunner;
    use std::path::PathBuf;

    #[test]
    fn init_runs_from_parent_dir() {
        let step = init_step(&PathBuf::from("/tmp/work"), "demo");
        assert_eq!(step.command_line(), "uv init --package demo");
        assert_eq!(step.working_dir, Some(PathBuf::from("/tmp/work")));
    }

    #[test]
    fn add_includes_runtime_packages() {
        let step = add_step(&PathBuf::from("/tmp/work/demo"));
        assert_eq!(
            step.command_line(),
            "uv add openai-agents python-dotenv"
        );
    }

    #[test]
    fn missing_uv_is_a_toolchain_error() {
        let runner = RecordingRunner::failing_on("uv version probe");
        let err = ensure_available(&runner).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ToolchainMissing);
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn available_uv_passes() {
        let runner = RecordingRunner::new();
        ensure_available(&runner).unwrap();
        assert_eq!(runner.labels(), vec!["uv version probe"]);
    }
}
