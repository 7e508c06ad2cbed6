use anyhow::Result;

use super::{connect, load_settings};
use crate::config::ResolveOptions;
use crate::error::ValidationError;
use crate::input::InputReader;
use crate::translation::{AgentDescriptor, RunConfig, Runner, SAMPLE_URDU_TEXT};
use crate::ui::Spinner;

pub struct RunOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub resolve: ResolveOptions,
    pub run_config: RunConfig,
}

/// Translates once with the fixed Urdu-to-English agent, blocking until done.
pub fn run_translate(options: RunOptions) -> Result<()> {
    let settings = load_settings(&options.resolve)?;
    let client = connect(&settings)?;

    let source_text = match (options.text, options.file.as_deref()) {
        (Some(text), _) => text,
        (None, Some(path)) => InputReader::read(path)?,
        (None, None) => SAMPLE_URDU_TEXT.to_string(),
    };

    if source_text.trim().is_empty() {
        return Err(ValidationError::EmptyInput.into());
    }

    let agent = AgentDescriptor::urdu_to_english();

    let spinner = Spinner::new("Translating...");
    let result = Runner::run_sync(&agent, &source_text, &client, &options.run_config);
    spinner.stop();
    let result = result?;

    println!("Input: {}", result.input);
    println!("---");
    println!("Output: {}", result.output);

    Ok(())
}
