//! Subcommand implementations.

use anyhow::Result;

use crate::config::{
    ConfigManager, ResolveOptions, Settings, load_credential, resolve_settings,
};
use crate::translation::{ClientHandle, ClientOptions};

/// Show-configuration command handler.
pub mod config;

/// Terminal form command handler.
pub mod prompt;

/// Blocking one-shot translation command handler.
pub mod run;

/// Web form command handler.
pub mod serve;

/// Loads the config file and merges it with CLI overrides.
pub fn load_settings(options: &ResolveOptions) -> Result<Settings> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load()?;
    Ok(resolve_settings(options, &config_file)?)
}

/// Loads the credential and builds the client handle.
///
/// Fails before any network I/O when the credential is missing.
pub fn connect(settings: &Settings) -> Result<ClientHandle> {
    let credential = load_credential(&settings.api_key_env)?;
    Ok(ClientHandle::new(credential, ClientOptions::from(settings))?)
}

/// Builds the single-threaded runtime the interactive commands run on.
fn current_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
