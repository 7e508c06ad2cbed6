//! Terminal rendition of the interactive form.

use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, Styled};
use inquire::{Select, Text};

use super::session::{FormSession, Outcome, ViewState};
use crate::error::ValidationError;
use crate::translation::{ChatModel, RunConfig, Runner, SUPPORTED_LANGUAGES};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prompts for a language and text, translates, shows the result, repeats.
pub struct TerminalForm<'a> {
    model: &'a dyn ChatModel,
    run_config: RunConfig,
    language: String,
    session: FormSession,
}

impl<'a> TerminalForm<'a> {
    pub fn new(model: &'a dyn ChatModel, run_config: RunConfig, default_language: &str) -> Self {
        Self {
            model,
            run_config,
            language: default_language.to_string(),
            session: FormSession::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        loop {
            let starting_cursor = SUPPORTED_LANGUAGES
                .iter()
                .position(|lang| *lang == self.language)
                .unwrap_or(0);

            let language = match Select::new("Target language", SUPPORTED_LANGUAGES.to_vec())
                .with_render_config(render_config)
                .with_starting_cursor(starting_cursor)
                .prompt()
            {
                Ok(lang) => lang,
                Err(e) if is_prompt_cancelled(&e) => break,
                Err(e) => return Err(e.into()),
            };
            self.language = language.to_string();

            let text = match Text::new("Text to translate")
                .with_render_config(render_config)
                .with_help_message("Enter English text, Ctrl+C to quit")
                .prompt()
            {
                Ok(text) => text,
                Err(e) if is_prompt_cancelled(&e) => break,
                Err(e) => return Err(e.into()),
            };

            self.submit(&text).await;
        }

        println!();
        println!("{}", Style::success("Goodbye!"));
        Ok(())
    }

    async fn submit(&mut self, text: &str) {
        let agent = match self.session.submit(&self.language, text) {
            Ok(agent) => agent,
            Err(e) => {
                print_validation(&e);
                return;
            }
        };

        let spinner = Spinner::new(&format!("Translating to {}...", self.language));
        let outcome = Runner::run(&agent, text, self.model, &self.run_config).await;
        spinner.stop();

        self.session.complete(outcome);
        print_state(self.session.state());
    }
}

fn print_header() {
    println!(
        "{} {} - Interactive Translation",
        Style::header("translator"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

fn print_validation(err: &ValidationError) {
    eprintln!("{} {err}", Style::warning("!"));
    eprintln!();
}

fn print_state(state: &ViewState) {
    match state {
        ViewState::Result(Outcome::Translated { language, result }) => {
            println!("{}", Style::header(format!("Translation ({language})")));
            println!("{}", result.output);
            println!();
        }
        ViewState::Result(Outcome::Failed { message, .. }) => {
            eprintln!("{} {message}", Style::error("Error:"));
            eprintln!();
        }
        ViewState::Idle | ViewState::Running { .. } => {}
    }
}
