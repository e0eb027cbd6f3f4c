use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use pom_gen::cli::commands::{cmd_generate, cmd_inspect};
use pom_gen::cli::config::{Cli, Commands, load_config};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    let outcome = match cli.command {
        Commands::Generate {
            source,
            class_name,
            namespace,
            output,
            trace,
        } => cmd_generate(
            &source,
            &class_name,
            namespace.as_deref(),
            output.as_deref(),
            trace.as_deref(),
            &config,
        )
        .map(|_| ()),
        Commands::Inspect { source, format } => cmd_inspect(&source, &format, &config),
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
