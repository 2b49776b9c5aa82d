mod types;

pub use types::*;

use std::io::{self, BufRead, IsTerminal, Write};

/// Data-driven interactive prompt engine.
/// Handles TTY detection and provides consistent prompting behavior.
/// Non-interactive runs fall back to each prompt's default.
pub struct PromptEngine {
    interactive: bool,
}

impl PromptEngine {
    /// Create engine with automatic TTY detection.
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }

    /// Force non-interactive mode (used by --yes).
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Run a text prompt. Returns the default when non-interactive or
    /// when the user submits an empty line.
    pub fn text(&self, prompt: &TextPrompt) -> Option<String> {
        if !self.interactive {
            return prompt.default.clone();
        }

        match &prompt.default {
            Some(default) => eprint!("{} [{}]: ", prompt.question, default),
            None => eprint!("{}: ", prompt.question),
        }
        io::stderr().flush().ok();

        let line = read_line()?;
        if line.is_empty() {
            return prompt.default.clone();
        }
        Some(line)
    }

    /// Run a secret prompt. No default; non-interactive returns None.
    pub fn secret(&self, prompt: &SecretPrompt) -> Option<String> {
        if !self.interactive {
            return None;
        }

        eprint!("{}: ", prompt.question);
        io::stderr().flush().ok();

        let line = read_line()?;
        if line.is_empty() {
            return None;
        }
        Some(line)
    }

    /// Run a select prompt (choose one option by number).
    pub fn select(&self, prompt: &SelectPrompt) -> Option<String> {
        if !self.interactive {
            return prompt
                .default_index
                .and_then(|i| prompt.options.get(i))
                .map(|o| o.value.clone());
        }

        eprintln!("{}", prompt.question);
        for (i, opt) in prompt.options.iter().enumerate() {
            let marker = if Some(i) == prompt.default_index {
                "*"
            } else {
                " "
            };
            eprintln!("  {}[{}] {}", marker, i + 1, opt.label);
        }

        eprint!("Enter choice (1-{}): ", prompt.options.len());
        io::stderr().flush().ok();

        let choice = read_line().filter(|l| !l.is_empty());
        match choice {
            None => prompt
                .default_index
                .and_then(|i| prompt.options.get(i))
                .map(|o| o.value.clone()),
            Some(input) => input
                .parse::<usize>()
                .ok()
                .and_then(|n| prompt.options.get(n.saturating_sub(1)))
                .map(|o| o.value.clone()),
        }
    }

    /// Display a message to stderr (only in interactive mode).
    pub fn message(&self, msg: &str) {
        if self.interactive {
            eprintln!("{}", msg);
        }
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn read_line() -> Option<String> {
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_text_uses_default() {
        let engine = PromptEngine::non_interactive();
        let prompt = TextPrompt {
            question: "Enter your project name".to_string(),
            default: Some("agent".to_string()),
        };
        assert_eq!(engine.text(&prompt), Some("agent".to_string()));
    }

    #[test]
    fn non_interactive_secret_is_none() {
        let engine = PromptEngine::non_interactive();
        let prompt = SecretPrompt {
            question: "Enter API key".to_string(),
        };
        assert_eq!(engine.secret(&prompt), None);
    }

    #[test]
    fn non_interactive_select_uses_default_index() {
        let engine = PromptEngine::non_interactive();
        let prompt = SelectPrompt {
            question: "Choose a model".to_string(),
            options: vec![
                SelectOption::new("gemini-2.0-flash"),
                SelectOption::new("gemini-2.5-flash"),
            ],
            default_index: Some(1),
        };
        assert_eq!(engine.select(&prompt), Some("gemini-2.5-flash".to_string()));
    }

    #[test]
    fn non_interactive_select_without_default_is_none() {
        let engine = PromptEngine::non_interactive();
        let prompt = SelectPrompt {
            question: "Choose".to_string(),
            options: vec![SelectOption::new("a")],
            default_index: None,
        };
        assert_eq!(engine.select(&prompt), None);
    }
}
