use std::cell::Ref;

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::render::{render_error, render_outputs, render_panel};
use super::ui;
use crate::config::AppConfig;
use crate::session::{Orchestrator, Outcome, Rejection, Trigger, ViewState};
use crate::translation::Translator;
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// What one submitted line led to.
#[derive(Debug)]
pub enum LineOutcome {
    /// The line fired a translate action from the given source.
    Triggered(Trigger, Outcome),
    /// A command ran without translating.
    Handled,
    Quit,
}

/// The interactive panel: one input region, the activation control as
/// `/translate`, and both outputs printed after each run.
///
/// Submitting a line is the keyboard chord: it replaces the input and
/// triggers a translation in one step.
pub struct PanelSession<T> {
    config: AppConfig,
    orchestrator: Orchestrator<T>,
}

impl<T: Translator> PanelSession<T> {
    pub fn new(config: AppConfig, translator: T) -> Self {
        let orchestrator = Orchestrator::new(translator, config.orchestrator_options());
        Self {
            config,
            orchestrator,
        }
    }

    pub async fn run(&self) -> Result<()> {
        ui::print_banner(&self.config);
        let strings = self.config.strings();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let line = Text::new(strings.input_label)
                .with_placeholder(strings.input_placeholder)
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Enter translates, /help for commands, Ctrl+C to quit")
                .prompt();

            match line {
                Ok(line) => {
                    if matches!(self.handle_line(&line).await, LineOutcome::Quit) {
                        break;
                    }
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    pub fn state(&self) -> Ref<'_, ViewState> {
        self.orchestrator.state()
    }

    /// Handles one submitted line: text replaces the input and fires the
    /// shortcut, a slash command runs.
    pub async fn handle_line(&self, line: &str) -> LineOutcome {
        match parse_input(line) {
            Input::Text(text) => {
                self.orchestrator.set_input(text);
                let outcome = self.translate(Trigger::Shortcut).await;
                LineOutcome::Triggered(Trigger::Shortcut, outcome)
            }
            Input::Command(cmd) => self.handle_command(cmd).await,
        }
    }

    async fn handle_command(&self, cmd: SlashCommand) -> LineOutcome {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return LineOutcome::Quit,
            SlashCommand::Show => {
                print!("{}", render_panel(&self.orchestrator.state(), self.config.strings()));
                println!();
            }
            SlashCommand::Translate => {
                let outcome = self.translate(Trigger::Button).await;
                return LineOutcome::Triggered(Trigger::Button, outcome);
            }
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        LineOutcome::Handled
    }

    async fn translate(&self, trigger: Trigger) -> Outcome {
        let strings = self.config.strings();

        let outcome = {
            let _spinner = self
                .orchestrator
                .control()
                .is_enabled()
                .then(|| Spinner::new(strings.translating));
            self.orchestrator.trigger(trigger).await
        };

        let state = self.orchestrator.state();
        match &outcome {
            Outcome::Translated => {
                println!();
                print!("{}", render_outputs(&state, strings));
            }
            Outcome::Ignored(Rejection::EmptyInput) => {
                println!("{}\n", Style::hint(strings.input_placeholder));
            }
            Outcome::Ignored(Rejection::Busy) => {}
            Outcome::Failed(_) => {
                if let Some(error) = render_error(&state) {
                    eprintln!("{error}\n");
                }
            }
        }
        outcome
    }
}
