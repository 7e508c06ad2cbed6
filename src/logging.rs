//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`, filtered by `RUST_LOG`
//! when it is set.

use tracing_subscriber::EnvFilter;

const CLI_FILTER: &str = "agent_translator=warn";
const SERVER_FILTER: &str = "agent_translator=info,tower_http=info";
const VERBOSE_FILTER: &str = "agent_translator=debug,tower_http=debug";
const QUIET_FILTER: &str = "agent_translator=error";

/// Picks the filter used when `RUST_LOG` is not set.
///
/// The web server logs requests at info; one-shot commands only warn.
pub const fn default_filter(verbose: bool, quiet: bool, server: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else if quiet {
        QUIET_FILTER
    } else if server {
        SERVER_FILTER
    } else {
        CLI_FILTER
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool, quiet: bool, server: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet, server)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, false, false), CLI_FILTER);
        assert_eq!(default_filter(false, false, true), SERVER_FILTER);
        assert_eq!(default_filter(true, false, false), VERBOSE_FILTER);
        assert_eq!(default_filter(false, true, true), QUIET_FILTER);
        // verbose wins over quiet
        assert_eq!(default_filter(true, true, false), VERBOSE_FILTER);
    }
}
