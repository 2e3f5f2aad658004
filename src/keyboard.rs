//! On-screen keyboard token model and key layouts.
//!
//! Key presses cross the presentation boundary as plain token strings: one
//! token per tap, character keys carrying the character itself and control
//! keys carrying a fixed glyph (`⇧`, `↑`, `ABC`, `⏎`, `#+=`, `⌫`, `123`).
//! This module owns the glyph-to-[`Key`] mapping so the text-entry session
//! core never matches on raw glyph strings.
//!
//! The four layouts are static key grids. Each key carries its token, an
//! ASCII caption (the mono fonts used for rendering are ASCII-only, so the
//! control glyphs get spelled-out captions) and a width weight used by the
//! keyboard widget to size keys within a row.

// =============================================================================
// Control Token Glyphs
// =============================================================================

/// Shift: switch the alphabetic layout to the shifted (uppercase) grid.
pub const TOKEN_SHIFT: &str = "⇧";
/// Caps arrow: shown on the shifted grid, drops back to lowercase.
pub const TOKEN_CAPS: &str = "↑";
/// Switch to the alphabetic layout.
pub const TOKEN_ABC: &str = "ABC";
/// Accept the current buffer.
pub const TOKEN_ACCEPT: &str = "⏎";
/// Switch to the symbolic layout.
pub const TOKEN_SYMBOLS: &str = "#+=";
/// Remove the last buffer character.
pub const TOKEN_BACKSPACE: &str = "⌫";
/// Switch to the numeric layout.
pub const TOKEN_NUMBERS: &str = "123";

// =============================================================================
// Key Classification
// =============================================================================

/// Control keys recognized by exact token match.
///
/// Every token that is *not* one of these is a character key: the session
/// appends its first character to the buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// `⇧` - switch to the shifted layout.
    Shift,
    /// `↑` - return from the shifted layout to lowercase.
    Caps,
    /// `ABC` - switch to the alphabetic layout.
    ToAlphabetic,
    /// `⏎` - accept the buffer (subject to validation).
    Accept,
    /// `#+=` - switch to the symbolic layout.
    ToSymbolic,
    /// `⌫` - delete the last character.
    Backspace,
    /// `123` - switch to the numeric layout.
    ToNumeric,
}

impl Key {
    /// Classify a token. Returns `None` for character keys.
    ///
    /// Matching is exact: a token like `"abc"` or `"⇧x"` is a character key,
    /// not a control key.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            TOKEN_SHIFT => Some(Self::Shift),
            TOKEN_CAPS => Some(Self::Caps),
            TOKEN_ABC => Some(Self::ToAlphabetic),
            TOKEN_ACCEPT => Some(Self::Accept),
            TOKEN_SYMBOLS => Some(Self::ToSymbolic),
            TOKEN_BACKSPACE => Some(Self::Backspace),
            TOKEN_NUMBERS => Some(Self::ToNumeric),
            _ => None,
        }
    }
}

// =============================================================================
// Layout Variants
// =============================================================================

/// Which key grid the keyboard currently shows.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Layout {
    /// Lowercase letters (default).
    #[default]
    Alphabetic,
    /// Uppercase letters.
    Shifted,
    /// Digits and common punctuation.
    Numeric,
    /// Brackets and symbols.
    Symbolic,
}

// =============================================================================
// Key Grids
// =============================================================================

/// One key on the grid: token sent on tap, ASCII caption drawn on the key,
/// and a width weight (plain character keys weigh 2).
pub struct KeyDef {
    pub token: &'static str,
    pub caption: &'static str,
    pub weight: u32,
}

impl KeyDef {
    /// A plain character key: caption is the token itself, standard width.
    const fn ch(c: &'static str) -> Self {
        Self { token: c, caption: c, weight: 2 }
    }

    /// A control or oversized key with an explicit caption and weight.
    const fn wide(token: &'static str, caption: &'static str, weight: u32) -> Self {
        Self { token, caption, weight }
    }
}

/// Lowercase grid.
const ALPHABETIC: [&[KeyDef]; 4] = [
    &[
        KeyDef::ch("q"),
        KeyDef::ch("w"),
        KeyDef::ch("e"),
        KeyDef::ch("r"),
        KeyDef::ch("t"),
        KeyDef::ch("y"),
        KeyDef::ch("u"),
        KeyDef::ch("i"),
        KeyDef::ch("o"),
        KeyDef::ch("p"),
    ],
    &[
        KeyDef::ch("a"),
        KeyDef::ch("s"),
        KeyDef::ch("d"),
        KeyDef::ch("f"),
        KeyDef::ch("g"),
        KeyDef::ch("h"),
        KeyDef::ch("j"),
        KeyDef::ch("k"),
        KeyDef::ch("l"),
    ],
    &[
        KeyDef::wide(TOKEN_SHIFT, "SHIFT", 3),
        KeyDef::ch("z"),
        KeyDef::ch("x"),
        KeyDef::ch("c"),
        KeyDef::ch("v"),
        KeyDef::ch("b"),
        KeyDef::ch("n"),
        KeyDef::ch("m"),
        KeyDef::wide(TOKEN_BACKSPACE, "DEL", 3),
    ],
    &[
        KeyDef::wide(TOKEN_NUMBERS, "123", 4),
        KeyDef::wide(" ", "SPACE", 12),
        KeyDef::wide(TOKEN_ACCEPT, "OK", 4),
    ],
];

/// Uppercase grid. Same shape as [`ALPHABETIC`]; the shift slot shows the
/// caps arrow, which drops back to lowercase.
const SHIFTED: [&[KeyDef]; 4] = [
    &[
        KeyDef::ch("Q"),
        KeyDef::ch("W"),
        KeyDef::ch("E"),
        KeyDef::ch("R"),
        KeyDef::ch("T"),
        KeyDef::ch("Y"),
        KeyDef::ch("U"),
        KeyDef::ch("I"),
        KeyDef::ch("O"),
        KeyDef::ch("P"),
    ],
    &[
        KeyDef::ch("A"),
        KeyDef::ch("S"),
        KeyDef::ch("D"),
        KeyDef::ch("F"),
        KeyDef::ch("G"),
        KeyDef::ch("H"),
        KeyDef::ch("J"),
        KeyDef::ch("K"),
        KeyDef::ch("L"),
    ],
    &[
        KeyDef::wide(TOKEN_CAPS, "abc", 3),
        KeyDef::ch("Z"),
        KeyDef::ch("X"),
        KeyDef::ch("C"),
        KeyDef::ch("V"),
        KeyDef::ch("B"),
        KeyDef::ch("N"),
        KeyDef::ch("M"),
        KeyDef::wide(TOKEN_BACKSPACE, "DEL", 3),
    ],
    &[
        KeyDef::wide(TOKEN_NUMBERS, "123", 4),
        KeyDef::wide(" ", "SPACE", 12),
        KeyDef::wide(TOKEN_ACCEPT, "OK", 4),
    ],
];

/// Digits and punctuation grid.
const NUMERIC: [&[KeyDef]; 4] = [
    &[
        KeyDef::ch("1"),
        KeyDef::ch("2"),
        KeyDef::ch("3"),
        KeyDef::ch("4"),
        KeyDef::ch("5"),
        KeyDef::ch("6"),
        KeyDef::ch("7"),
        KeyDef::ch("8"),
        KeyDef::ch("9"),
        KeyDef::ch("0"),
    ],
    &[
        KeyDef::ch("-"),
        KeyDef::ch("/"),
        KeyDef::ch(":"),
        KeyDef::ch(";"),
        KeyDef::ch("("),
        KeyDef::ch(")"),
        KeyDef::ch("$"),
        KeyDef::ch("&"),
        KeyDef::ch("@"),
        KeyDef::ch("\""),
    ],
    &[
        KeyDef::wide(TOKEN_SYMBOLS, "#+=", 3),
        KeyDef::ch("."),
        KeyDef::ch(","),
        KeyDef::ch("?"),
        KeyDef::ch("!"),
        KeyDef::ch("'"),
        KeyDef::wide(TOKEN_BACKSPACE, "DEL", 3),
    ],
    &[
        KeyDef::wide(TOKEN_ABC, "ABC", 4),
        KeyDef::wide(" ", "SPACE", 12),
        KeyDef::wide(TOKEN_ACCEPT, "OK", 4),
    ],
];

/// Brackets and symbols grid.
const SYMBOLIC: [&[KeyDef]; 4] = [
    &[
        KeyDef::ch("["),
        KeyDef::ch("]"),
        KeyDef::ch("{"),
        KeyDef::ch("}"),
        KeyDef::ch("#"),
        KeyDef::ch("%"),
        KeyDef::ch("^"),
        KeyDef::ch("*"),
        KeyDef::ch("+"),
        KeyDef::ch("="),
    ],
    &[
        KeyDef::ch("_"),
        KeyDef::ch("\\"),
        KeyDef::ch("|"),
        KeyDef::ch("~"),
        KeyDef::ch("<"),
        KeyDef::ch(">"),
        KeyDef::ch("`"),
    ],
    &[
        KeyDef::wide(TOKEN_NUMBERS, "123", 3),
        KeyDef::ch("."),
        KeyDef::ch(","),
        KeyDef::ch("?"),
        KeyDef::ch("!"),
        KeyDef::ch("'"),
        KeyDef::wide(TOKEN_BACKSPACE, "DEL", 3),
    ],
    &[
        KeyDef::wide(TOKEN_ABC, "ABC", 4),
        KeyDef::wide(" ", "SPACE", 12),
        KeyDef::wide(TOKEN_ACCEPT, "OK", 4),
    ],
];

impl Layout {
    /// The 4-row key grid for this layout variant.
    pub const fn rows(self) -> &'static [&'static [KeyDef]; 4] {
        match self {
            Self::Alphabetic => &ALPHABETIC,
            Self::Shifted => &SHIFTED,
            Self::Numeric => &NUMERIC,
            Self::Symbolic => &SYMBOLIC,
        }
    }
}
