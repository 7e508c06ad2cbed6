use anyhow::Result;

use super::{connect, current_thread_runtime, load_settings};
use crate::config::ResolveOptions;
use crate::form::TerminalForm;
use crate::translation::RunConfig;

pub struct PromptOptions {
    pub resolve: ResolveOptions,
    pub run_config: RunConfig,
}

/// Runs the terminal form until the user cancels.
pub fn run_prompt(options: PromptOptions) -> Result<()> {
    let settings = load_settings(&options.resolve)?;
    let client = connect(&settings)?;

    let mut form = TerminalForm::new(&client, options.run_config, &settings.default_language);
    current_thread_runtime()?.block_on(form.run())
}
