// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution.

use minecraft_colors::{FormatError, Formatter};
use std::io::{self, Read, Write};
use thiserror::Error;

use crate::cli::{Cli, Command};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to read input '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Resolve the formatter from the config file, then apply command flags.
pub fn build_formatter(cli: &Cli) -> Result<Formatter, FormatError> {
    let mut formatter = match &cli.config {
        Some(path) => Formatter::load(path)?,
        None => Formatter::default(),
    };

    match &cli.command {
        Command::Clean(_) => {}
        Command::Motd { sign, .. } => {
            if let Some(sign) = sign {
                formatter.motd_sign = sign.clone();
            }
        }
        Command::Html {
            line_breaks,
            css_classes,
            css_prefix,
            ..
        } => {
            formatter.html.line_break_element |= *line_breaks;
            formatter.html.css_classes |= *css_classes;
            if let Some(prefix) = css_prefix {
                formatter.html.css_prefix = prefix.clone();
            }
        }
    }

    Ok(formatter)
}

/// Apply the command's conversion to raw input bytes.
pub fn convert(formatter: &Formatter, command: &Command, input: &[u8]) -> String {
    match command {
        Command::Clean(_) => formatter.clean(input),
        Command::Motd { .. } => formatter.to_motd(input),
        Command::Html { .. } => formatter.to_html(input),
    }
}

fn read_input(cli: &Cli, stdin: &mut impl Read) -> Result<Vec<u8>, RunError> {
    match cli.command.input().file() {
        Some(path) => std::fs::read(path).map_err(|source| RunError::Input {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .map_err(|source| RunError::Input {
                    path: "-".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

/// Run the parsed command against the given streams.
pub fn run(cli: &Cli, stdin: &mut impl Read, stdout: &mut impl Write) -> Result<(), RunError> {
    let formatter = build_formatter(cli)?;
    let input = read_input(cli, stdin)?;
    tracing::debug!(bytes = input.len(), command = ?cli.command, "converting input");

    let output = convert(&formatter, &cli.command, &input);
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(RunError::Output)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
