mod agent;
mod client;
#[cfg(test)]
pub(crate) mod fake;
mod language;
mod prompt;
mod runner;

pub use agent::AgentDescriptor;
pub use client::{ChatModel, ClientHandle, ClientOptions};
pub use language::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES, print_languages, validate_language};
pub use prompt::SAMPLE_URDU_TEXT;
pub use runner::{RunConfig, Runner, TranslationResult};
