use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit the panel"),
    ("/show", "Show the whole panel"),
    ("/translate", "Translate the current input again"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .map(|s| s.split_whitespace().next().unwrap_or_default().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
    Show,
    Translate,
    Unknown(String),
}

/// One submitted prompt line.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// New source text, kept exactly as typed.
    Text(String),
    Command(SlashCommand),
}

/// Splits a prompt line into source text or a slash command.
///
/// Blank lines are text too: the orchestrator decides they do nothing.
pub fn parse_input(line: &str) -> Input {
    line.trim_start()
        .strip_prefix('/')
        .map_or_else(|| Input::Text(line.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        Some("show") => SlashCommand::Show,
        Some("translate" | "t") => SlashCommand::Translate,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };
    Input::Command(command)
}
