// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cgrep::cli::Cli;
use cgrep::error::ExitCode;

mod cmd_check;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cmd_check::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("cgrep: {e:#}");
            ExitCode::ConfigError
        }
    };
    code.into()
}

/// Log to stderr. `--verbose` forces debug level; otherwise `CGREP_LOG`
/// selects the filter, defaulting to warnings.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("CGREP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
