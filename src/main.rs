//! QuestLang CLI entry point

use clap::Parser;

use questlang::cli::{self, Cli};

fn main() {
    let args = Cli::parse();

    // Structured logging to stderr with env-based filter; `--verbose` lowers the default to debug
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init();

    cli::run(args);
}
