use clap::Args;
use serde::Serialize;

use botstrap::defaults::{DEFAULT_MODEL, MODEL_PRESETS};

use super::CmdResult;

#[derive(Args)]
pub struct ModelsArgs {}

#[derive(Debug, Serialize)]
pub struct ModelsOutput {
    pub command: &'static str,
    pub models: Vec<String>,
    pub default: String,
}

pub fn run_json(_args: ModelsArgs) -> CmdResult<ModelsOutput> {
    Ok((
        ModelsOutput {
            command: "models",
            models: MODEL_PRESETS.iter().map(|m| m.to_string()).collect(),
            default: DEFAULT_MODEL.to_string(),
        },
        0,
    ))
}
