//! # translator - agent-style translation over a hosted LLM
//!
//! `translator` sends text to an OpenAI-compatible chat-completion endpoint
//! (Gemini by default) together with a translator agent's system instruction
//! and returns the model's translation.
//!
//! Two front ends share one core:
//!
//! - **Blocking one-shot**: `translator run` translates Urdu to English and
//!   prints `Input:` / `Output:`.
//! - **Interactive form**: `translator serve` (web page) or
//!   `translator prompt` (terminal) translate English into a chosen language.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"   # or put it in ./.env
//!
//! # Translate the built-in Urdu sample
//! translator
//!
//! # Serve the web form on http://127.0.0.1:8000
//! translator serve
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/translator/config.toml`:
//!
//! ```toml
//! [translator]
//! model = "gemini-2.0-flash"
//! timeout_secs = 60
//! bind = "127.0.0.1:8000"
//! default_language = "Urdu"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Credential loading and settings resolution.
pub mod config;

/// Configuration, validation and translation errors.
pub mod error;

/// The interactive form's state machine and terminal front end.
pub mod form;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Agents, the chat-completion client and the run invoker.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

/// The web form.
pub mod web;
