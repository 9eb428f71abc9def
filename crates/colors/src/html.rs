// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML rendering of formatted text.
//!
//! Tokens become `<span>` elements carrying either an inline style or a CSS
//! class. A color code or reset closes every span opened before it; other
//! formatting codes nest inside the current color. Spans left open at the
//! end of the text are closed there.
//!
//! Spans that end up wrapping nothing but whitespace are dropped along with
//! that whitespace, so runs like `§a§b` or `§l§r` leave no markup behind.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::codes::Code;
use crate::encoding::normalize;
use crate::escape::escape_html;
use crate::scanner::tokens;

/// Default prefix for generated class names.
pub const DEFAULT_CSS_PREFIX: &str = "minecraft-formatted--";

const CLOSE_TAG: &str = "</span>";
const LINE_BREAK: &str = "<br />";
const CSS_COLOR: &str = "color: #";

/// Rendering options for [`convert_to_html`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlOptions {
    /// Replace newlines (and literal `\n`) with `<br />`.
    pub line_break_element: bool,

    /// Emit `class="..."` instead of inline `style="..."`.
    pub css_classes: bool,

    /// Prefix for class names in class mode.
    pub css_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            line_break_element: false,
            css_classes: false,
            css_prefix: DEFAULT_CSS_PREFIX.to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn with_line_break_element(mut self, enabled: bool) -> Self {
        self.line_break_element = enabled;
        self
    }

    pub fn with_css_classes(mut self, enabled: bool) -> Self {
        self.css_classes = enabled;
        self
    }

    pub fn with_css_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.css_prefix = prefix.into();
        self
    }
}

/// A span whose opening tag has been written but not yet closed.
struct OpenSpan {
    /// Output length before the opening tag, for dropping an empty span.
    start: usize,
    has_content: bool,
}

/// Builds the HTML output, tracking open spans.
///
/// Text is held in `pending` until markup is written, so a literal `\n`
/// split by a token that renders nothing is still seen as one line break.
struct HtmlBuilder<'a> {
    out: String,
    pending: String,
    open: Vec<OpenSpan>,
    options: &'a HtmlOptions,
}

impl<'a> HtmlBuilder<'a> {
    fn new(capacity: usize, options: &'a HtmlOptions) -> Self {
        Self {
            out: String::with_capacity(capacity),
            pending: String::new(),
            open: Vec::new(),
            options,
        }
    }

    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        let text = if self.options.line_break_element {
            Cow::Owned(pending.replace('\n', LINE_BREAK).replace("\\n", LINE_BREAK))
        } else {
            Cow::Borrowed(pending.as_str())
        };
        if !is_blank(&text) {
            for span in &mut self.open {
                span.has_content = true;
            }
        }
        self.out.push_str(&text);
    }

    fn open_span(&mut self, attribute: &str, value: &str) {
        self.flush();
        self.open.push(OpenSpan {
            start: self.out.len(),
            has_content: false,
        });
        self.out.push_str("<span ");
        self.out.push_str(attribute);
        self.out.push_str("=\"");
        self.out.push_str(value);
        self.out.push_str("\">");
    }

    fn close_all(&mut self) {
        if self.open.is_empty() {
            return;
        }
        self.flush();
        while let Some(span) = self.open.pop() {
            if span.has_content {
                self.out.push_str(CLOSE_TAG);
            } else {
                self.out.truncate(span.start);
            }
        }
    }

    fn apply(&mut self, code: Code) {
        if code.is_reset() || code.is_color() {
            self.close_all();
        }

        if self.options.css_classes {
            if !code.is_reset() {
                let class = format!(
                    "{}{}",
                    html_escape::encode_double_quoted_attribute(&self.options.css_prefix),
                    code.class_name()
                );
                self.open_span("class", &class);
            }
        } else if let Some(hex) = code.hex() {
            self.open_span("style", &format!("{CSS_COLOR}{hex}"));
        } else if !matches!(code, Code::Obfuscated | Code::Reset) {
            // Obfuscated text has no inline equivalent.
            if let Some(style) = code.style() {
                self.open_span("style", style);
            }
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.close_all();
        self.out
    }
}

/// Whitespace as PCRE's `\s` sees it.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

/// Convert formatted text to HTML.
///
/// The text is HTML-escaped first. Without any tokens the escaped text is
/// returned as is, with no line-break conversion.
pub fn convert_to_html(text: impl AsRef<[u8]>, options: &HtmlOptions) -> String {
    let text = normalize(text.as_ref());
    let escaped = escape_html(&text);

    let found = tokens(&escaped);
    if found.is_empty() {
        return escaped.into_owned();
    }
    tracing::trace!(tokens = found.len(), "rendering formatted text as html");

    let mut builder = HtmlBuilder::new(escaped.len() * 2, options);
    let mut last_end = 0;
    for token in &found {
        builder.push_text(&escaped[last_end..token.start]);
        builder.apply(token.code);
        last_end = token.end;
    }
    builder.push_text(&escaped[last_end..]);

    builder.finish()
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
