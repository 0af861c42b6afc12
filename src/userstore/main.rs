use clap::Parser;
use colored::Colorize;
use std::io;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse_from(args::normalize_flags(std::env::args_os()));
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    if let Err(e) = userstore::api::perform(cli.into_arguments(), &mut stdout) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; stdout carries operation output only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
