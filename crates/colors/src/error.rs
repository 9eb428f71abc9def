// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors for the fallible edges of the crate.
//!
//! The conversions themselves never fail; only code lookup and config
//! loading can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unknown formatting code: {0:?}")]
    UnknownCode(char),

    #[error("Failed to read formatter config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Config(#[from] toml::de::Error),
}
