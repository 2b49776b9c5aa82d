//! Content templates for the generated project files.

use crate::defaults::{ENV_API_KEY, ENV_BASE_URL, ENV_MODEL};
use crate::utils::template::{render, TemplateVars};

const AGENT_MAIN_TEMPLATE: &str = r#"import asyncio
import os

from dotenv import load_dotenv
from agents import Agent, Runner, OpenAIChatCompletionsModel, set_tracing_disabled
from openai import AsyncOpenAI


def build_agent() -> Agent:
    model_name = os.getenv("GEMINI_MODEL")
    api_key = os.getenv("GEMINI_API_KEY")
    base_url = os.getenv("BASE_URL")

    set_tracing_disabled(True)
    client = AsyncOpenAI(api_key=api_key, base_url=base_url)
    model = OpenAIChatCompletionsModel(model_name, client)
    return Agent(
        name="{{agentName}}",
        instructions="{{agentPurpose}}",
        model=model,
    )


async def chat_loop(agent: Agent) -> None:
    while True:
        prompt = input("Ask a question (or type 'exit' to quit): ")
        if prompt.lower() == "exit":
            break
        result = await Runner.run(agent, prompt)
        print("\nAgent:", result.final_output, "\n")


def main() -> None:
    load_dotenv()
    asyncio.run(chat_loop(build_agent()))


if __name__ == "__main__":
    main()
"#;

const AGENT_INIT_TEMPLATE: &str = "from .main import main\n\n__all__ = [\"main\"]\n";

const PACKAGE_INIT_TEMPLATE: &str = "# package initializer\n";

/// Render the generated assistant's `agent/main.py`.
///
/// The agent is built once inside `main()` from explicit environment
/// configuration and passed to the conversation loop; the template
/// deliberately has no module-level client or model.
pub fn agent_main(agent_name: &str, agent_purpose: &str) -> String {
    render(
        AGENT_MAIN_TEMPLATE,
        &[
            (TemplateVars::AGENT_NAME, &python_str(agent_name)),
            (TemplateVars::AGENT_PURPOSE, &python_str(agent_purpose)),
        ],
    )
}

/// `agent/__init__.py`: re-exports `main` so the manifest target
/// `<package>.agent:main` resolves.
pub fn agent_init() -> &'static str {
    AGENT_INIT_TEMPLATE
}

/// `<package>/__init__.py` marker file.
pub fn package_init() -> &'static str {
    PACKAGE_INIT_TEMPLATE
}

/// `.env` content: one KEY=VALUE line per recognized variable.
pub fn env_file(api_key: &str, model: &str, base_url: Option<&str>) -> String {
    let mut content = format!("{}={}\n{}={}\n", ENV_API_KEY, api_key, ENV_MODEL, model);
    if let Some(url) = base_url {
        content.push_str(&format!("{}={}\n", ENV_BASE_URL, url));
    }
    content
}

/// Escape a value for interpolation into a double-quoted Python
/// string literal.
fn python_str(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_main_interpolates_name_and_purpose() {
        let source = agent_main("Helper Bot", "Answer questions");
        assert!(source.contains("name=\"Helper Bot\""));
        assert!(source.contains("instructions=\"Answer questions\""));
        assert!(!source.contains("{{"));
    }

    #[test]
    fn agent_main_escapes_quotes() {
        let source = agent_main("Bot", "Say \"hi\" to users");
        assert!(source.contains("instructions=\"Say \\\"hi\\\" to users\""));
    }

    #[test]
    fn env_file_without_base_url() {
        let content = env_file("secret", "gemini-2.0-flash", None);
        assert_eq!(content, "GEMINI_API_KEY=secret\nGEMINI_MODEL=gemini-2.0-flash\n");
    }

    #[test]
    fn env_file_with_base_url() {
        let content = env_file("secret", "m", Some("https://example.test/v1"));
        assert!(content.ends_with("BASE_URL=https://example.test/v1\n"));
    }
}
