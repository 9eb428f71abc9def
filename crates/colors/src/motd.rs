// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server-list MOTD encoding.
//!
//! Produces a single line suitable for a quoted protocol field: every token
//! is rewritten to use a configurable sign as its marker and newlines become
//! the two characters `\n`.

use crate::encoding::normalize;
use crate::scanner::raw_tokens;

/// The escaped section sign, as JSON and Java string literals spell it.
pub const DEFAULT_MOTD_SIGN: &str = "\\u00A7";

fn push_line(out: &mut String, text: &str) {
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push_str("\\n");
        out.push_str(line);
    }
}

/// Convert to MOTD form using [`DEFAULT_MOTD_SIGN`].
pub fn convert_to_motd(text: impl AsRef<[u8]>) -> String {
    convert_to_motd_with_sign(text, DEFAULT_MOTD_SIGN)
}

/// Convert to MOTD form with a custom marker.
///
/// Both `§` and `&` introduce a token. The code character keeps the case it
/// was written in. Text outside tokens, ampersands included, is copied as is.
pub fn convert_to_motd_with_sign(text: impl AsRef<[u8]>, sign: &str) -> String {
    let text = normalize(text.as_ref());
    let found = raw_tokens(&text);
    tracing::trace!(tokens = found.len(), "encoding motd");

    let mut out = String::with_capacity(text.len() + found.len() * sign.len());
    let mut last_end = 0;
    for token in &found {
        push_line(&mut out, &text[last_end..token.start]);
        out.push_str(sign);
        out.push(token.raw);
        last_end = token.end;
    }
    push_line(&mut out, &text[last_end..]);

    out
}

#[cfg(test)]
#[path = "motd_tests.rs"]
mod tests;
