// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text cleaning and the configurable [`Formatter`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::encoding::normalize;
use crate::error::FormatError;
use crate::escape::escape_html;
use crate::html::{convert_to_html, HtmlOptions};
use crate::motd::{convert_to_motd_with_sign, DEFAULT_MOTD_SIGN};
use crate::scanner::strip_tokens;

/// HTML-escape the text and remove every format token.
///
/// Unrecognized codes such as `§g` are left in place.
pub fn clean(text: impl AsRef<[u8]>) -> String {
    let text = normalize(text.as_ref());
    strip_tokens(&escape_html(&text))
}

/// Conversion settings bundled for reuse, loadable from TOML.
///
/// ```toml
/// motd_sign = "§"
///
/// [html]
/// css_classes = true
/// css_prefix = "mc-"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Formatter {
    /// Marker written in front of each code by [`Formatter::to_motd`].
    pub motd_sign: String,

    pub html: HtmlOptions,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            motd_sign: DEFAULT_MOTD_SIGN.to_string(),
            html: HtmlOptions::default(),
        }
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, FormatError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, FormatError> {
        let content = std::fs::read_to_string(path)?;
        let formatter = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded formatter config");
        Ok(formatter)
    }

    pub fn with_motd_sign(mut self, sign: impl Into<String>) -> Self {
        self.motd_sign = sign.into();
        self
    }

    pub fn with_html(mut self, html: HtmlOptions) -> Self {
        self.html = html;
        self
    }

    /// See [`clean`].
    pub fn clean(&self, text: impl AsRef<[u8]>) -> String {
        clean(text)
    }

    /// See [`convert_to_motd_with_sign`].
    pub fn to_motd(&self, text: impl AsRef<[u8]>) -> String {
        convert_to_motd_with_sign(text, &self.motd_sign)
    }

    /// See [`convert_to_html`].
    pub fn to_html(&self, text: impl AsRef<[u8]>) -> String {
        convert_to_html(text, &self.html)
    }
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
