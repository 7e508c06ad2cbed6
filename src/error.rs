//! Error taxonomy.
//!
//! Three kinds of failure cross module boundaries:
//!
//! - [`ConfigurationError`] aborts startup.
//! - [`ValidationError`] stays inside the presentation layer.
//! - [`TranslationError`] covers a single failed round-trip; the session continues.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Maximum number of characters of a remote error body kept in a message.
const MAX_BODY_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(
        "{var} is not set\n\n\
         Set it in your environment or in a .env file:\n  \
         export {var}=\"your-api-key\""
    )]
    MissingCredential { var: String },

    #[error("Failed to parse config file {path}: {message}")]
    InvalidFile { path: String, message: String },

    #[error("Invalid timeout: must be at least 1 second")]
    InvalidTimeout,

    #[error("Unsupported default language in config: '{0}'\n\nRun 'translator languages' to see all supported languages.")]
    InvalidDefaultLanguage(String),

    #[error("Invalid endpoint URL: '{0}'")]
    InvalidEndpoint(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to translate.")]
    EmptyInput,

    #[error("Please choose a target language.")]
    EmptyTargetLanguage,

    #[error("Unsupported target language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("A translation is already in progress.")]
    Busy,
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Nothing to translate: input is empty")]
    EmptyInput,

    #[error("Could not reach the translation service: {0}")]
    Network(String),

    #[error("The translation service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("The translation service returned {status}: {body}")]
    Remote { status: StatusCode, body: String },

    #[error("The translation service sent a response that could not be read: {0}")]
    MalformedResponse(String),

    #[error("The translation service returned an empty translation")]
    EmptyResponse,

    #[error("Failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl TranslationError {
    /// Builds a [`TranslationError::Remote`], truncating long bodies.
    pub fn remote(status: StatusCode, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_BODY_CHARS) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        };
        Self::Remote { status, body }
    }

    /// Short machine-readable name of the failure kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Remote { .. } => "remote",
            Self::MalformedResponse(_) => "malformed_response",
            Self::EmptyResponse => "empty_response",
            Self::Runtime(_) => "runtime",
        }
    }
}
