use std::{io, process::ExitCode};

use clap::{ArgAction, Parser};
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use patterns::demo;

/// Walks through the Command, Template Method and Mediator patterns.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let colored = stdout.is_tty();

    match demo::run(io::stdin().lock(), &mut stdout.lock(), colored) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("patterns: {e}");
            ExitCode::FAILURE
        }
    }
}
