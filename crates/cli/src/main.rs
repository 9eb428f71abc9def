// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mccolors binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mccolors::cli::Cli;
use mccolors::diagnostic::print_error;
use mccolors::run::run;

fn main() {
    // Logs go to stderr so converted text on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli, &mut std::io::stdin().lock(), &mut std::io::stdout().lock()) {
        print_error(e);
        std::process::exit(1);
    }
}
