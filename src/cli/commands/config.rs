use anyhow::Result;

use super::load_settings;
use crate::config::{ConfigManager, ResolveOptions, load_credential};
use crate::ui::Style;

/// Prints the resolved settings. The credential itself is never shown.
pub fn print_config(options: &ResolveOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let settings = load_settings(options)?;

    let credential_status = if load_credential(&settings.api_key_env).is_ok() {
        Style::success("(set)")
    } else {
        Style::warning("(not set)")
    };

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&settings.endpoint)
    );
    println!("  {}     {}", Style::label("model"), Style::value(&settings.model));
    println!(
        "  {}   {} {}",
        Style::label("api key"),
        Style::value(&settings.api_key_env),
        credential_status
    );
    println!(
        "  {}   {}s",
        Style::label("timeout"),
        settings.timeout.as_secs()
    );
    println!("  {}      {}", Style::label("bind"), Style::value(&settings.bind));
    println!(
        "  {}  {}",
        Style::label("language"),
        Style::value(&settings.default_language)
    );

    Ok(())
}
