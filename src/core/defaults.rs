//! Built-in defaults for the generator's prompts and templates.

pub const DEFAULT_PROJECT_NAME: &str = "agent";
pub const DEFAULT_AGENT_NAME: &str = "Helpful Assistant";
pub const DEFAULT_AGENT_PURPOSE: &str =
    "You're a helpful assistant, help user with any query";

/// Model presets offered by the select prompt. Free text is accepted
/// via the custom escape hatch.
pub const MODEL_PRESETS: &[&str] = &["gemini-2.0-flash", "gemini-2.5-flash"];

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable names written to the generated `.env`.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "BASE_URL";

/// Runtime packages installed into the generated project.
pub const RUNTIME_PACKAGES: &[&str] = &["openai-agents", "python-dotenv"];
