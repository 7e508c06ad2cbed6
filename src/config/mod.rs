//! Credential loading and settings resolution.

mod credential;
mod manager;

pub use credential::{Credential, DEFAULT_API_KEY_ENV, load_credential, load_dotenv};
pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_BIND, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, ResolveOptions, Settings, TranslatorConfig, resolve_settings,
};
