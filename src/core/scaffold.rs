use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::command::{run_steps, CommandRunner};
use crate::error::Result;
use crate::files::{ensure_dir, ensure_file};
use crate::log_status;
use crate::manifest::merge_scripts;
use crate::scripts::{resolve_aliases, ScriptEntry};
use crate::slugify::{package_name, slugify};
use crate::{template, uv};

/// Everything the generator needs, collected up front. Immutable for
/// the rest of the run.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    pub project_name: String,
    pub agent_name: String,
    pub agent_purpose: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldOutput {
    pub project_dir: String,
    pub package: String,
    pub files: Vec<FileReport>,
    pub scripts: Vec<ScriptEntry>,
    pub next_steps: Vec<String>,
}

/// Manifest table that registers the generated entry points.
const SCRIPTS_TABLE: &[&str] = &["project", "scripts"];

/// Generate a complete assistant project under `parent_dir`.
///
/// Toolchain steps run fail-fast through `runner`; file creation is
/// skip-if-exists throughout, so re-running after a partial failure
/// picks up where the previous run stopped instead of clobbering it.
pub fn generate(
    spec: &ProjectSpec,
    parent_dir: &Path,
    runner: &dyn CommandRunner,
    skip_toolchain: bool,
) -> Result<ScaffoldOutput> {
    let project_slug = slugify(&spec.project_name);
    let package = package_name(&project_slug);
    let project_dir = parent_dir.join(&project_slug);

    if !skip_toolchain {
        uv::ensure_available(runner)?;
        run_steps(
            runner,
            &[
                uv::init_step(parent_dir, &project_slug),
                uv::venv_step(&project_dir),
                uv::add_step(&project_dir),
            ],
        )?;
    }

    ensure_dir(&project_dir)?;

    let mut files = Vec::new();
    let mut track = |path: &PathBuf, status: crate::files::FileStatus| {
        files.push(FileReport {
            path: path.display().to_string(),
            status: status.as_str(),
        });
    };

    let env_path = project_dir.join(".env");
    let env_content = template::env_file(&spec.api_key, &spec.model, spec.base_url.as_deref());
    track(&env_path, ensure_file(&env_path, &env_content)?);

    let pkg_root = project_dir.join("src").join(&package);
    let pkg_init = pkg_root.join("__init__.py");
    track(&pkg_init, ensure_file(&pkg_init, template::package_init())?);

    let agent_dir = pkg_root.join("agent");
    let agent_init = agent_dir.join("__init__.py");
    track(&agent_init, ensure_file(&agent_init, template::agent_init())?);

    let agent_main = agent_dir.join("main.py");
    let agent_source = template::agent_main(&spec.agent_name, &spec.agent_purpose);
    track(&agent_main, ensure_file(&agent_main, &agent_source)?);

    let scripts = resolve_aliases(&spec.project_name, &spec.agent_name);
    let manifest_path = project_dir.join("pyproject.toml");
    merge_scripts(&manifest_path, SCRIPTS_TABLE, &scripts)?;
    log_status!(
        "scaffold",
        "Registered scripts: {}",
        scripts
            .iter()
            .map(|s| s.alias.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if !skip_toolchain {
        run_steps(runner, &[uv::sync_step(&project_dir)])?;
    }

    let qualified = scripts
        .last()
        .map(|s| s.alias.clone())
        .unwrap_or_default();

    Ok(ScaffoldOutput {
        project_dir: project_dir.display().to_string(),
        package,
        files,
        scripts,
        next_steps: vec![
            format!("cd {}", project_slug),
            format!("uv run {}", qualified),
        ],
    })
}
