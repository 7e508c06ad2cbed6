use clap::Parser;

use agent_translator::cli::commands::{config, prompt, run, serve};
use agent_translator::cli::{Args, Command, exit_code_for};
use agent_translator::config::{ResolveOptions, load_dotenv};
use agent_translator::logging;
use agent_translator::output::{self, OutputConfig};
use agent_translator::translation::{RunConfig, print_languages};
use agent_translator::ui::Style;

fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    logging::init(args.verbose, args.quiet, args.is_server());
    load_dotenv();

    if let Err(e) = dispatch(args) {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code_for(&e));
    }
}

fn dispatch(args: Args) -> anyhow::Result<()> {
    let resolve = ResolveOptions {
        endpoint: args.endpoint,
        model: args.model,
        timeout_secs: args.timeout,
        bind: None,
    };
    let run_config = RunConfig {
        tracing_disabled: !args.trace_content,
    };

    match args.command {
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Command::Config) => config::print_config(&resolve),
        Some(Command::Prompt) => prompt::run_prompt(prompt::PromptOptions {
            resolve,
            run_config,
        }),
        Some(Command::Serve { bind }) => serve::run_serve(serve::ServeOptions {
            resolve: ResolveOptions { bind, ..resolve },
            run_config,
        }),
        Some(Command::Run { text, file }) => run::run_translate(run::RunOptions {
            text,
            file,
            resolve,
            run_config,
        }),
        None => run::run_translate(run::RunOptions {
            text: None,
            file: None,
            resolve,
            run_config,
        }),
    }
}
