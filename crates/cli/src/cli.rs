// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Convert Minecraft formatting codes
#[derive(Parser, Debug)]
#[command(name = "mccolors", version, about = "Convert Minecraft formatting codes")]
pub struct Cli {
    /// TOML file with formatter settings (flags override it)
    #[arg(long, global = true, env = "MCCOLORS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Strip formatting codes and HTML-escape the text
    Clean(InputArgs),

    /// Rewrite codes for a server-list MOTD field
    Motd {
        /// Marker written before each code (default: \u00A7)
        #[arg(long)]
        sign: Option<String>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Render codes as HTML spans
    Html {
        /// Turn newlines into <br /> elements
        #[arg(long)]
        line_breaks: bool,

        /// Use CSS classes instead of inline styles
        #[arg(long)]
        css_classes: bool,

        /// Prefix for generated class names
        #[arg(long, value_name = "PREFIX")]
        css_prefix: Option<String>,

        #[command(flatten)]
        input: InputArgs,
    },
}

impl Command {
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Clean(input) => input,
            Command::Motd { input, .. } => input,
            Command::Html { input, .. } => input,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file; `-` or nothing reads stdin
    #[arg(value_name = "INPUT")]
    pub path: Option<PathBuf>,
}

impl InputArgs {
    /// The file to read, or `None` for stdin.
    pub fn file(&self) -> Option<&PathBuf> {
        self.path.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
