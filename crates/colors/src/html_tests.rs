// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use rstest::rstest;

fn inline(text: &str) -> String {
    convert_to_html(text, &HtmlOptions::default())
}

fn classes(text: &str, prefix: &str) -> String {
    convert_to_html(
        text,
        &HtmlOptions::default()
            .with_css_classes(true)
            .with_css_prefix(prefix),
    )
}

// =============================================================================
// Inline style mode
// =============================================================================

#[test]
fn test_two_colors() {
    assert_eq!(
        inline("§aHello §bWorld"),
        r#"<span style="color: #55FF55">Hello </span><span style="color: #55FFFF">World</span>"#
    );
}

#[test]
fn test_reset_closes_bold() {
    assert_eq!(
        inline("§lBold§r normal"),
        r#"<span style="font-weight: bold;">Bold</span> normal"#
    );
}

#[test]
fn test_formatting_nests_inside_color() {
    assert_eq!(
        inline("§cRed §lBold"),
        r#"<span style="color: #FF5555">Red <span style="font-weight: bold;">Bold</span></span>"#
    );
}

#[test]
fn test_new_color_closes_formatting() {
    assert_eq!(
        inline("§l§oX§eY"),
        r#"<span style="font-weight: bold;"><span style="font-style: italic;">X</span></span><span style="color: #FFFF55">Y</span>"#
    );
}

#[test]
fn test_formatting_does_not_close_previous() {
    assert_eq!(
        inline("§nA§mB"),
        r#"<span style="text-decoration: underline;">A<span style="text-decoration: line-through;">B</span></span>"#
    );
}

#[test]
fn test_obfuscated_is_dropped_inline() {
    assert_eq!(inline("§kSecret"), "Secret");
    assert_eq!(
        inline("§6Gold §kmagic"),
        r#"<span style="color: #FFAA00">Gold magic</span>"#
    );
}

#[test]
fn test_upper_case_codes() {
    assert_eq!(inline("§AHi"), r#"<span style="color: #55FF55">Hi</span>"#);
}

#[test]
fn test_ampersand_codes() {
    assert_eq!(
        inline("&4Dark &rplain"),
        r#"<span style="color: #AA0000">Dark </span>plain"#
    );
}

#[test]
fn test_repeated_identical_tokens() {
    assert_eq!(
        inline("§aone §atwo"),
        r#"<span style="color: #55FF55">one </span><span style="color: #55FF55">two</span>"#
    );
}

// =============================================================================
// Empty span elision
// =============================================================================

#[rstest]
#[case("§a§bText", r#"<span style="color: #55FFFF">Text</span>"#)]
#[case("§l§r", "")]
#[case("Hello§a", "Hello")]
#[case("§a   §bX", r#"<span style="color: #55FFFF">X</span>"#)]
#[case("§a§l§rdone", "done")]
#[case("§k§r", "")]
fn test_empty_spans_removed(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(inline(input), expected);
}

#[test]
fn test_whitespace_kept_inside_non_empty_span() {
    assert_eq!(
        inline("§a  x  "),
        r#"<span style="color: #55FF55">  x  </span>"#
    );
}

// =============================================================================
// Class mode
// =============================================================================

#[test]
fn test_class_mode_prefix() {
    assert_eq!(classes("§4Red", "mc-"), r#"<span class="mc-dark-red">Red</span>"#);
}

#[test]
fn test_class_mode_default_prefix() {
    assert_eq!(
        convert_to_html("§oI", &HtmlOptions::default().with_css_classes(true)),
        r#"<span class="minecraft-formatted--italic">I</span>"#
    );
}

#[test]
fn test_class_mode_keeps_obfuscated() {
    assert_eq!(
        classes("§kX§rY", "mc-"),
        r#"<span class="mc-obfuscated">X</span>Y"#
    );
}

#[test]
fn test_class_mode_nesting() {
    assert_eq!(
        classes("§2A§nB§3C", "mc-"),
        r#"<span class="mc-dark-green">A<span class="mc-underline">B</span></span><span class="mc-dark-aqua">C</span>"#
    );
}

#[test]
fn test_class_prefix_is_attribute_escaped() {
    assert_eq!(classes("§fW", "a\"b-"), r#"<span class="a&quot;b-white">W</span>"#);
}

// =============================================================================
// Escaping and line breaks
// =============================================================================

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        inline("§a<b>&"),
        r#"<span style="color: #55FF55">&lt;b&gt;&amp;</span>"#
    );
}

#[test]
fn test_existing_references_pass_through() {
    assert_eq!(inline("&lt;b&gt;"), "&lt;b&gt;");
    assert_eq!(
        inline("&amp;4x"),
        r#"<span style="color: #AA0000">x</span>"#
    );
}

#[test]
fn test_no_tokens_returns_escaped_text() {
    assert_eq!(inline("a < b"), "a &lt; b");
    let opts = HtmlOptions::default().with_line_break_element(true);
    assert_eq!(convert_to_html("one\ntwo", &opts), "one\ntwo");
}

#[test]
fn test_line_breaks() {
    let opts = HtmlOptions::default().with_line_break_element(true);
    assert_eq!(
        convert_to_html("§aone\ntwo\\nthree", &opts),
        r#"<span style="color: #55FF55">one<br />two<br />three</span>"#
    );
}

#[test]
fn test_line_break_is_content() {
    let opts = HtmlOptions::default().with_line_break_element(true);
    assert_eq!(
        convert_to_html("§a\n§bX", &opts),
        r#"<span style="color: #55FF55"><br /></span><span style="color: #55FFFF">X</span>"#
    );
    // Without <br />, a lone newline is whitespace and its span is dropped
    assert_eq!(inline("§a\n§bX"), r#"<span style="color: #55FFFF">X</span>"#);
}

#[rstest]
#[case(r"x\§rny", "x<br />y")]
#[case(r"§ax\§kny", r#"<span style="color: #55FF55">x<br />y</span>"#)]
#[case(r"x\§r§kny", "x<br />y")]
#[case(r"\§a§rn", r"\n")]
fn test_escaped_newline_across_silent_token(#[case] input: &str, #[case] expected: &str) {
    let opts = HtmlOptions::default().with_line_break_element(true);
    assert_eq!(convert_to_html(input, &opts), expected);
}

#[test]
fn test_escaped_newline_split_by_class_span_stays_literal() {
    let opts = HtmlOptions::default()
        .with_line_break_element(true)
        .with_css_classes(true)
        .with_css_prefix("mc-");
    assert_eq!(
        convert_to_html(r"§ax\§kny", &opts),
        r#"<span class="mc-green">x\<span class="mc-obfuscated">ny</span></span>"#
    );
}

#[test]
fn test_latin1_input() {
    assert_eq!(
        convert_to_html(b"\xA7cHot".as_slice(), &HtmlOptions::default()),
        r#"<span style="color: #FF5555">Hot</span>"#
    );
}

#[test]
fn test_options_deserialize_with_defaults() {
    let opts: HtmlOptions = toml::from_str("css_classes = true").unwrap();
    assert!(opts.css_classes);
    assert!(!opts.line_break_element);
    assert_eq!(opts.css_prefix, DEFAULT_CSS_PREFIX);
}

#[test]
fn test_options_reject_unknown_fields() {
    assert!(toml::from_str::<HtmlOptions>("css_class = true").is_err());
}

proptest! {
    #[test]
    fn html_without_tokens_is_escaped_input(text in "[^§&]*") {
        prop_assert_eq!(inline(&text), crate::escape::escape_html(&text).into_owned());
    }

    #[test]
    fn html_consumes_every_token(text in "([a-z ]|§[0-9a-fk-or])*") {
        let out = inline(&text);
        prop_assert!(crate::scanner::tokens(&out).is_empty());
    }

    #[test]
    fn html_spans_are_balanced(text in "([a-z ]|§[0-9a-fk-orA-F])*", css in any::<bool>()) {
        let opts = HtmlOptions::default().with_css_classes(css);
        let out = convert_to_html(&text, &opts);
        prop_assert_eq!(out.matches("<span ").count(), out.matches(CLOSE_TAG).count());
    }
}
