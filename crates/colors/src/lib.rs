// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minecraft formatting codes to plain text, MOTD strings, or HTML.
//!
//! A format token is a marker (`§`, or `&` which HTML-escapes to `&amp;`)
//! followed by one of the sixteen color codes `0`-`9` `a`-`f`, the
//! formatting codes `k`-`o`, or the reset code `r`. Code letters are
//! case-insensitive.
//!
//! ```
//! use minecraft_colors::{clean, convert_to_html, convert_to_motd, HtmlOptions};
//!
//! assert_eq!(clean("§aHello §lworld"), "Hello world");
//! assert_eq!(convert_to_motd("&6Gold\nline"), r"\u00A76Gold\nline");
//! assert_eq!(
//!     convert_to_html("§4Red", &HtmlOptions::default().with_css_classes(true).with_css_prefix("mc-")),
//!     r#"<span class="mc-dark-red">Red</span>"#
//! );
//! ```
//!
//! Every conversion accepts raw bytes as well as strings; input that is not
//! valid UTF-8 is read as ISO-8859-1.

mod codes;
mod encoding;
mod error;
mod escape;
mod formatter;
mod html;
mod motd;
mod scanner;

pub use codes::Code;
pub use encoding::normalize;
pub use error::FormatError;
pub use escape::escape_html;
pub use formatter::{clean, Formatter};
pub use html::{convert_to_html, HtmlOptions, DEFAULT_CSS_PREFIX};
pub use motd::{convert_to_motd, convert_to_motd_with_sign, DEFAULT_MOTD_SIGN};
pub use scanner::{raw_tokens, strip_tokens, tokens, Marker, Token};
