use std::path::Path;

use serde::Serialize;
use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::files;
use crate::scripts::ScriptEntry;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutput {
    pub path: String,
    pub table_path: String,
    pub written: Vec<String>,
}

/// Register script aliases in the manifest at `manifest_path`.
///
/// Reads the existing TOML document (or starts empty when the file is
/// missing), walks `table_path` creating intermediate tables as
/// needed, writes each alias into the leaf table, and serializes the
/// whole document back. Keys not named in `entries` are preserved,
/// including siblings of every intermediate table.
///
/// A manifest that does not parse as TOML aborts the run; the merger
/// never guesses a repair.
pub fn merge_scripts(
    manifest_path: &Path,
    table_path: &[&str],
    entries: &[ScriptEntry],
) -> Result<MergeOutput> {
    if table_path.is_empty() {
        return Err(Error::validation_invalid_argument(
            "table_path",
            "Table path cannot be empty",
            None,
        ));
    }

    let mut doc: Table = if manifest_path.exists() {
        let content = files::read(manifest_path)?;
        content.parse::<Table>().map_err(|e| {
            Error::manifest_invalid_toml(manifest_path.display().to_string(), e.to_string())
        })?
    } else {
        Table::new()
    };

    {
        let leaf = resolve_leaf_table(&mut doc, manifest_path, table_path)?;
        for entry in entries {
            leaf.insert(entry.alias.clone(), Value::String(entry.target.clone()));
        }
    }

    let serialized = toml::to_string_pretty(&doc)
        .map_err(|e| Error::internal_unexpected(format!("serialize manifest: {}", e)))?;
    files::write(manifest_path, &serialized)?;

    Ok(MergeOutput {
        path: manifest_path.display().to_string(),
        table_path: table_path.join("."),
        written: entries.iter().map(|e| e.alias.clone()).collect(),
    })
}

/// Walk `table_path`, creating missing tables. An existing non-table
/// value at any level is a conflict, not something to overwrite.
fn resolve_leaf_table<'a>(
    doc: &'a mut Table,
    manifest_path: &Path,
    table_path: &[&str],
) -> Result<&'a mut Table> {
    let mut current = doc;

    for (depth, name) in table_path.iter().enumerate() {
        let existing = current
            .entry(name.to_string())
            .or_insert_with(|| Value::Table(Table::new()));

        match existing {
            Value::Table(table) => current = table,
            _ => {
                return Err(Error::manifest_invalid_table(
                    manifest_path.display().to_string(),
                    table_path[..=depth].join("."),
                    format!("'{}' exists but is not a table", name),
                ));
            }
        }
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(alias: &str, target: &str) -> ScriptEntry {
        ScriptEntry {
            alias: alias.to_string(),
            target: target.to_string(),
        }
    }

    fn parse(path: &Path) -> Table {
        files::read(path).unwrap().parse::<Table>().unwrap()
    }

    #[test]
    fn merge_into_missing_manifest_creates_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pyproject.toml");

        merge_scripts(&path, &["project", "scripts"], &[entry("bot", "demo.agent:main")])
            .unwrap();

        let doc = parse(&path);
        assert_eq!(
            doc["project"]["scripts"]["bot"].as_str(),
            Some("demo.agent:main")
        );
    }

    #[test]
    fn merge_preserves_untouched_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pyproject.toml");
        files::write(&path, "[a]\nx = 1\n\n[b]\ny = 2\n").unwrap();

        merge_scripts(&path, &["b"], &[entry("z", "demo.agent:main")]).unwrap();

        let doc = parse(&path);
        assert_eq!(doc["a"]["x"].as_integer(), Some(1));
        assert_eq!(doc["b"]["y"].as_integer(), Some(2));
        assert_eq!(doc["b"]["z"].as_str(), Some("demo.agent:main"));
    }

    #[test]
    fn merge_preserves_sibling_scripts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pyproject.toml");
        files::write(
            &path,
            "[project]\nname = \"demo\"\n\n[project.scripts]\nexisting = \"demo.cli:main\"\n",
        )
        .unwrap();

        merge_scripts(
            &path,
            &["project", "scripts"],
            &[entry("helper-bot", "demo.agent:main")],
        )
        .unwrap();

        let doc = parse(&path);
        assert_eq!(doc["project"]["name"].as_str(), Some("demo"));
        assert_eq!(
            doc["project"]["scripts"]["existing"].as_str(),
            Some("demo.cli:main")
        );
        assert_eq!(
            doc["project"]["scripts"]["helper-bot"].as_str(),
            Some("demo.agent:main")
        );
    }

    #[test]
    fn merge_overwrites_existing_alias() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pyproject.toml");

        merge_scripts(&path, &["project", "scripts"], &[entry("bot", "old.agent:main")])
            .unwrap();
        merge_scripts(&path, &["project", "scripts"], &[entry("bot", "new.agent:main")])
            .unwrap();

        let doc = parse(&path);
        assert_eq!(
            doc["project"]["scripts"]["bot"].as_str(),
            Some("new.agent:main")
        );
    }

    #[test]
    fn merge_supports_tool_table_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pyproject.toml");

        merge_scripts(
            &path,
            &["tool", "uv", "scripts"],
            &[entry("bot", "demo.agent:main")],
        )
        .unwrap();

        let doc = parse(&path);
        assert_eq!(
            doc["tool"]["uv"]["scripts"]["bot"].as_str(),
            Some("demo.agent:main")
        );
    }

    #[test]
    fn invalid_toml_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pyproject.toml");
        files::write(&path, "not [ valid toml").unwrap();

        let err = merge_scripts(&path, &["project", "scripts"], &[]).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ManifestInvalidToml);
    }

    #[test]
    fn non_table_intermediate_is_a_conflict() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pyproject.toml");
        files::write(&path, "project = \"not-a-table\"\n").unwrap();

        let err = merge_scripts(&path, &["project", "scripts"], &[]).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ManifestInvalidTable);
    }
}
