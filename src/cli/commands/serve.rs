use anyhow::Result;
use std::sync::Arc;

use super::{connect, current_thread_runtime, load_settings};
use crate::config::ResolveOptions;
use crate::translation::RunConfig;
use crate::web::{self, AppState};

pub struct ServeOptions {
    pub resolve: ResolveOptions,
    pub run_config: RunConfig,
}

/// Serves the web form on a single-threaded runtime.
pub fn run_serve(options: ServeOptions) -> Result<()> {
    let settings = load_settings(&options.resolve)?;
    let client = connect(&settings)?;

    let state = AppState::new(
        Arc::new(client),
        options.run_config,
        &settings.default_language,
    );

    current_thread_runtime()?.block_on(web::serve(state, &settings.bind))
}
