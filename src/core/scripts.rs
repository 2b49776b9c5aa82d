use serde::Serialize;

use crate::slugify::{package_name, slugify};

/// One alias registered in the manifest's script table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptEntry {
    pub alias: String,
    pub target: String,
}

/// Entry-point function inside the generated agent module.
const ENTRY_FUNCTION: &str = "main";

/// Derive the invocation aliases for a generated agent.
///
/// `friendly` is the sanitized agent name, ergonomic from inside the
/// project directory. `qualified` prefixes the sanitized project name
/// so that multiple generated projects sharing one manifest scope
/// cannot collide. Both point at the same target. When the two names
/// coincide the duplicate is harmless: the merger overwrites by key.
pub fn resolve_aliases(project_name: &str, agent_name: &str) -> Vec<ScriptEntry> {
    let project_slug = slugify(project_name);
    let friendly = slugify(agent_name);
    let qualified = format!("{}-{}", project_slug, friendly);
    let target = script_target(&project_slug);

    vec![
        ScriptEntry {
            alias: friendly,
            target: target.clone(),
        },
        ScriptEntry {
            alias: qualified,
            target,
        },
    ]
}

/// `<package>.agent:main` import target for a project slug.
pub fn script_target(project_slug: &str) -> String {
    format!("{}.agent:{}", package_name(project_slug), ENTRY_FUNCTION)
}
