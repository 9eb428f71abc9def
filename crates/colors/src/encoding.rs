// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input normalization to UTF-8.

use std::borrow::Cow;

/// Normalize raw input to UTF-8 text.
///
/// Valid UTF-8 is borrowed as is. Anything else is read as ISO-8859-1, where
/// every byte is a code point, so this never fails and applying it to its own
/// output is a no-op.
pub fn normalize(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            tracing::debug!(
                valid_up_to = e.valid_up_to(),
                len = bytes.len(),
                "input is not UTF-8, decoding as ISO-8859-1"
            );
            encoding_rs::mem::decode_latin1(bytes)
        }
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
