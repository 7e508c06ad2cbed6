use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "translator")]
#[command(about = "Translate text with a hosted LLM translator agent")]
#[command(version)]
pub struct Args {
    /// Model name
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log request and response text (debug level)
    #[arg(long, global = true)]
    pub trace_content: bool,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate Urdu text to English once and print it (the default)
    Run {
        /// Text to translate (the built-in sample if omitted)
        text: Option<String>,

        /// Read the text from a file ('-' for stdin)
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<String>,
    },
    /// Serve the interactive translation form over HTTP
    Serve {
        /// Address to listen on (e.g., 127.0.0.1:8000)
        #[arg(short = 'b', long)]
        bind: Option<String>,
    },
    /// Interactive translation form in the terminal
    Prompt,
    /// List supported target languages
    Languages,
    /// Show the resolved configuration
    Config,
}

impl Args {
    /// Whether this invocation runs the long-lived web server.
    pub const fn is_server(&self) -> bool {
        matches!(self.command, Some(Command::Serve { .. }))
    }
}
