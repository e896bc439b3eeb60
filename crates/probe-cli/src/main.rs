use std::io;

use clap::Parser;
use probe_config::CredentialError;

mod bootstrap;
mod cli;
mod output;
mod report;

use cli::{Cli, OutputFormat};

/// Exit status when the credential key is absent from the env file.
const EXIT_KEY_NOT_FOUND: i32 = 1;
/// Exit status for every other fatal failure.
const EXIT_FAILURE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        if let Some(missing) = error
            .downcast_ref::<CredentialError>()
            .filter(|e| e.is_key_not_found())
        {
            println!("{missing}");
            std::process::exit(EXIT_KEY_NOT_FOUND);
        }
        eprintln!("docprobe error: {error:#}");
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(cli)?;
    let client = bootstrap::connect(&config)?;

    let mut out = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => {
            let counts = report::run(&client, &mut out)?;
            tracing::debug!(?counts, "report complete");
        }
        OutputFormat::Json => {
            let report = output::collect(&client)?;
            output::write(&mut out, &report)?;
        }
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DOCPROBE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
