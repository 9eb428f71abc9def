// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed Minecraft code table.
//!
//! Sixteen color codes (`0`-`9`, `a`-`f`), five formatting codes (`k`-`o`) and
//! the reset code `r`. Each code knows its RGB value, inline CSS fragment and
//! CSS class suffix.

use crate::error::FormatError;

/// A recognized formatting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl Code {
    /// Every code, colors first, in table order.
    pub const ALL: [Code; 22] = [
        Code::Black,
        Code::DarkBlue,
        Code::DarkGreen,
        Code::DarkAqua,
        Code::DarkRed,
        Code::DarkPurple,
        Code::Gold,
        Code::Gray,
        Code::DarkGray,
        Code::Blue,
        Code::Green,
        Code::Aqua,
        Code::Red,
        Code::LightPurple,
        Code::Yellow,
        Code::White,
        Code::Obfuscated,
        Code::Bold,
        Code::Strikethrough,
        Code::Underline,
        Code::Italic,
        Code::Reset,
    ];

    /// Look up a code character, ignoring ASCII case.
    ///
    /// Only ASCII letters qualify: `'\u{212A}'` (KELVIN SIGN) folds to `k`
    /// under Unicode rules but is not a Minecraft code.
    pub fn from_char(c: char) -> Option<Self> {
        let code = match c.to_ascii_lowercase() {
            '0' => Code::Black,
            '1' => Code::DarkBlue,
            '2' => Code::DarkGreen,
            '3' => Code::DarkAqua,
            '4' => Code::DarkRed,
            '5' => Code::DarkPurple,
            '6' => Code::Gold,
            '7' => Code::Gray,
            '8' => Code::DarkGray,
            '9' => Code::Blue,
            'a' => Code::Green,
            'b' => Code::Aqua,
            'c' => Code::Red,
            'd' => Code::LightPurple,
            'e' => Code::Yellow,
            'f' => Code::White,
            'k' => Code::Obfuscated,
            'l' => Code::Bold,
            'm' => Code::Strikethrough,
            'n' => Code::Underline,
            'o' => Code::Italic,
            'r' => Code::Reset,
            _ => return None,
        };
        Some(code)
    }

    /// The canonical (lower-case) code character.
    pub fn as_char(self) -> char {
        match self {
            Code::Black => '0',
            Code::DarkBlue => '1',
            Code::DarkGreen => '2',
            Code::DarkAqua => '3',
            Code::DarkRed => '4',
            Code::DarkPurple => '5',
            Code::Gold => '6',
            Code::Gray => '7',
            Code::DarkGray => '8',
            Code::Blue => '9',
            Code::Green => 'a',
            Code::Aqua => 'b',
            Code::Red => 'c',
            Code::LightPurple => 'd',
            Code::Yellow => 'e',
            Code::White => 'f',
            Code::Obfuscated => 'k',
            Code::Bold => 'l',
            Code::Strikethrough => 'm',
            Code::Underline => 'n',
            Code::Italic => 'o',
            Code::Reset => 'r',
        }
    }

    /// Whether this is one of the sixteen color codes.
    pub fn is_color(self) -> bool {
        self.hex().is_some()
    }

    pub fn is_reset(self) -> bool {
        self == Code::Reset
    }

    /// RGB value as six upper-case hex digits, for color codes only.
    pub fn hex(self) -> Option<&'static str> {
        let hex = match self {
            Code::Black => "000000",
            Code::DarkBlue => "0000AA",
            Code::DarkGreen => "00AA00",
            Code::DarkAqua => "00AAAA",
            Code::DarkRed => "AA0000",
            Code::DarkPurple => "AA00AA",
            Code::Gold => "FFAA00",
            Code::Gray => "AAAAAA",
            Code::DarkGray => "555555",
            Code::Blue => "5555FF",
            Code::Green => "55FF55",
            Code::Aqua => "55FFFF",
            Code::Red => "FF5555",
            Code::LightPurple => "FF55FF",
            Code::Yellow => "FFFF55",
            Code::White => "FFFFFF",
            _ => return None,
        };
        Some(hex)
    }

    /// Inline CSS fragment, for formatting codes only.
    ///
    /// Obfuscated text has no CSS equivalent and reset carries no style, so
    /// both map to an empty fragment.
    pub fn style(self) -> Option<&'static str> {
        match self {
            Code::Obfuscated | Code::Reset => Some(""),
            Code::Bold => Some("font-weight: bold;"),
            Code::Strikethrough => Some("text-decoration: line-through;"),
            Code::Underline => Some("text-decoration: underline;"),
            Code::Italic => Some("font-style: italic;"),
            _ => None,
        }
    }

    /// CSS class suffix used in class mode.
    pub fn class_name(self) -> &'static str {
        match self {
            Code::Black => "black",
            Code::DarkBlue => "dark-blue",
            Code::DarkGreen => "dark-green",
            Code::DarkAqua => "dark-aqua",
            Code::DarkRed => "dark-red",
            Code::DarkPurple => "dark-purple",
            Code::Gold => "gold",
            Code::Gray => "gray",
            Code::DarkGray => "dark-gray",
            Code::Blue => "blue",
            Code::Green => "green",
            Code::Aqua => "aqua",
            Code::Red => "red",
            Code::LightPurple => "light-purple",
            Code::Yellow => "yellow",
            Code::White => "white",
            Code::Obfuscated => "obfuscated",
            Code::Bold => "bold",
            Code::Strikethrough => "line-strikethrough",
            Code::Underline => "underline",
            Code::Italic => "italic",
            Code::Reset => "reset",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Code::Black => "Black",
            Code::DarkBlue => "Dark Blue",
            Code::DarkGreen => "Dark Green",
            Code::DarkAqua => "Dark Aqua",
            Code::DarkRed => "Dark Red",
            Code::DarkPurple => "Dark Purple",
            Code::Gold => "Gold",
            Code::Gray => "Gray",
            Code::DarkGray => "Dark Gray",
            Code::Blue => "Blue",
            Code::Green => "Green",
            Code::Aqua => "Aqua",
            Code::Red => "Red",
            Code::LightPurple => "Light Purple",
            Code::Yellow => "Yellow",
            Code::White => "White",
            Code::Obfuscated => "Obfuscated",
            Code::Bold => "Bold",
            Code::Strikethrough => "Strikethrough",
            Code::Underline => "Underline",
            Code::Italic => "Italic",
            Code::Reset => "Reset",
        }
    }
}

impl TryFrom<char> for Code {
    type Error = FormatError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Code::from_char(c).ok_or(FormatError::UnknownCode(c))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod tests;
