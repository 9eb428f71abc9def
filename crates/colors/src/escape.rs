// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML escaping of the five reserved characters.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches a complete character reference (`&amp;`, `&#167;`, `&#xA7;`).
static CHAR_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);")
        .expect("character reference regex pattern is invalid")
});

/// Escape `&`, `<`, `>`, `"` and `'`.
///
/// Character references already present are copied through untouched, so
/// escaping escaped text returns it unchanged. Unlike `htmlspecialchars`, an
/// input of `&lt;b&gt;` therefore renders as `<b>` in a browser, and a typed
/// `&amp;4` reads as a dark red format token downstream.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut last_end = 0;

    for m in CHAR_REF_REGEX.find_iter(text) {
        html_escape::encode_quoted_attribute_to_string(&text[last_end..m.start()], &mut out);
        out.push_str(m.as_str());
        last_end = m.end();
    }
    html_escape::encode_quoted_attribute_to_string(&text[last_end..], &mut out);

    Cow::Owned(out)
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
