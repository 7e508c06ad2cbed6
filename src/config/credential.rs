use std::fmt;

use crate::error::ConfigurationError;

/// Environment variable holding the API key unless the config file names another.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// The API key authorizing requests to the remote service.
///
/// Never empty. `Debug` output is redacted so the key cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw key, rejecting empty or whitespace-only values.
    pub fn new(var: &str, value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::MissingCredential {
                var: var.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw key for use in an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Populates the process environment from a `.env` file in the working directory.
///
/// Variables already present in the environment are left untouched, and a
/// missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }
}

/// Reads the credential from the named environment variable.
pub fn load_credential(var: &str) -> Result<Credential, ConfigurationError> {
    let value = std::env::var(var).unwrap_or_default();
    Credential::new(var, value)
}
