use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use botstrap::command::SystemRunner;
use botstrap::defaults::{
    DEFAULT_AGENT_NAME, DEFAULT_AGENT_PURPOSE, DEFAULT_MODEL, DEFAULT_PROJECT_NAME, MODEL_PRESETS,
};
use botstrap::prompt::{PromptEngine, SecretPrompt, SelectOption, SelectPrompt, TextPrompt};
use botstrap::scaffold::{self, ProjectSpec, ScaffoldOutput};

use super::CmdResult;

#[derive(Args)]
pub struct NewArgs {
    /// Project name (prompted when omitted)
    pub name: Option<String>,

    /// Assistant display name
    #[arg(long)]
    pub agent_name: Option<String>,

    /// Assistant instructions text
    #[arg(long)]
    pub purpose: Option<String>,

    /// Model identifier (preset or free text)
    #[arg(long)]
    pub model: Option<String>,

    /// Model provider API key, written to the project .env
    #[arg(long)]
    pub api_key: Option<String>,

    /// Optional base URL override for the model provider
    #[arg(long)]
    pub base_url: Option<String>,

    /// Parent directory for the generated project
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Skip all prompts, accepting defaults for anything not passed as a flag
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Materialize files and manifest without running the uv toolchain
    #[arg(long)]
    pub skip_toolchain: bool,
}

#[derive(Debug, Serialize)]
pub struct NewOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub scaffold: ScaffoldOutput,
}

pub fn run_json(args: NewArgs) -> CmdResult<NewOutput> {
    let engine = if args.yes {
        PromptEngine::non_interactive()
    } else {
        PromptEngine::new()
    };

    let spec = collect_spec(&args, &engine);
    let output = scaffold::generate(&spec, &args.dir, &SystemRunner, args.skip_toolchain)?;

    engine.message(&format!(
        "Project ready. Next: {}",
        output.next_steps.join(" && ")
    ));

    Ok((
        NewOutput {
            command: "new",
            scaffold: output,
        },
        0,
    ))
}

/// Assemble the ProjectSpec: flags win, then prompts, then defaults.
fn collect_spec(args: &NewArgs, engine: &PromptEngine) -> ProjectSpec {
    let project_name = args.name.clone().unwrap_or_else(|| {
        engine
            .text(&TextPrompt {
                question: "Enter your project name".to_string(),
                default: Some(DEFAULT_PROJECT_NAME.to_string()),
            })
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
    });

    let api_key = args.api_key.clone().unwrap_or_else(|| {
        engine
            .secret(&SecretPrompt {
                question: "Enter Gemini API key".to_string(),
            })
            .unwrap_or_default()
    });

    let model = args.model.clone().unwrap_or_else(|| select_model(engine));

    let agent_name = args.agent_name.clone().unwrap_or_else(|| {
        engine
            .text(&TextPrompt {
                question: "Enter agent name".to_string(),
                default: Some(DEFAULT_AGENT_NAME.to_string()),
            })
            .unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string())
    });

    let agent_purpose = args.purpose.clone().unwrap_or_else(|| {
        engine
            .text(&TextPrompt {
                question: "Enter your agent work".to_string(),
                default: Some(DEFAULT_AGENT_PURPOSE.to_string()),
            })
            .unwrap_or_else(|| DEFAULT_AGENT_PURPOSE.to_string())
    });

    ProjectSpec {
        project_name,
        agent_name,
        agent_purpose,
        model,
        api_key,
        base_url: args.base_url.clone(),
    }
}

const CUSTOM_MODEL: &str = "__custom__";

fn select_model(engine: &PromptEngine) -> String {
    let mut options: Vec<SelectOption> =
        MODEL_PRESETS.iter().map(|m| SelectOption::new(*m)).collect();
    options.push(SelectOption::labeled(CUSTOM_MODEL, "Custom (type your own)"));

    let choice = engine
        .select(&SelectPrompt {
            question: "Choose a model".to_string(),
            options,
            default_index: Some(0),
        })
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if choice != CUSTOM_MODEL {
        return choice;
    }

    engine
        .text(&TextPrompt {
            question: "Enter your model".to_string(),
            default: Some(DEFAULT_MODEL.to_string()),
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
