// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Format token scanner.
//!
//! A token is a marker followed by one recognized code character. In
//! HTML-escaped text the markers are `§` and the entity `&amp;`; in raw text
//! they are `§` and a bare `&`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::codes::Code;

/// Code characters spelled out per case so Unicode case folding (KELVIN SIGN
/// for `k`) can never widen the match.
const CODE_CLASS: &str = "[0-9a-fA-Fk-oK-OrR]";

/// Tokens in escaped text.
static ESCAPED_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(&format!("(?:§|&[aA][mM][pP];)({CODE_CLASS})"))
        .expect("escaped token regex pattern is invalid")
});

/// Tokens in raw, unescaped text.
static RAW_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(&format!("[§&]({CODE_CLASS})")).expect("raw token regex pattern is invalid")
});

/// Which marker introduced a token.
///
/// Part of the public scanning API for callers that inspect tokens
/// themselves; the converters only need the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `§`
    Section,
    /// `&`, or `&amp;` in escaped text
    Ampersand,
}

/// A format token located in scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the marker.
    pub start: usize,
    /// Byte offset just past the code character.
    pub end: usize,
    pub marker: Marker,
    pub code: Code,
    /// The code character as written, case preserved.
    pub raw: char,
}

impl Token {
    /// The token's text in the string it was scanned from.
    ///
    /// `text` must be the string passed to [`tokens`] or [`raw_tokens`].
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

fn collect(regex: &Regex, text: &str) -> Vec<Token> {
    regex
        .captures_iter(text)
        .filter_map(|cap| {
            let full = cap.get(0)?;
            let code_match = cap.get(1)?;
            let raw = code_match.as_str().chars().next()?;
            let code = Code::from_char(raw)?;
            let marker = if full.as_str().starts_with('§') {
                Marker::Section
            } else {
                Marker::Ampersand
            };
            Some(Token {
                start: full.start(),
                end: full.end(),
                marker,
                code,
                raw,
            })
        })
        .collect()
}

/// Find every token in HTML-escaped text, left to right, non-overlapping.
pub fn tokens(text: &str) -> Vec<Token> {
    collect(&ESCAPED_TOKEN_REGEX, text)
}

/// Find every token in raw text, where a bare `&` acts as a marker.
pub fn raw_tokens(text: &str) -> Vec<Token> {
    collect(&RAW_TOKEN_REGEX, text)
}

/// Delete every token from escaped text.
///
/// Repeats until nothing matches: removing the inner token of `§§aa` leaves a
/// new `§a` behind.
pub fn strip_tokens(text: &str) -> String {
    let mut current = Cow::Borrowed(text);
    while ESCAPED_TOKEN_REGEX.is_match(&current) {
        current = Cow::Owned(ESCAPED_TOKEN_REGEX.replace_all(&current, "").into_owned());
    }
    current.into_owned()
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
