//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! # Optimization: Static Style Constants
//!
//! `MonoTextStyle` and `TextStyle` construction involves copying font
//! references and building style structs. By defining these as `const`, the
//! compiler computes the style objects at compile time and stores them in the
//! binary's read-only data section, so draw functions reference them directly
//! without any runtime construction.
//!
//! The mono fonts here are ASCII-only, which is why on-screen keyboard keys
//! carry a separate ASCII caption next to their (possibly non-ASCII) token.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BLACK, GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for key captions, buttons, and dialog cards.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for row titles, prompts, and the input field.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for row values.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Medium white text for row titles and key captions (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Medium gray text for row values and secondary labels.
pub const TITLE_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, GRAY);

/// Large white text for the text-entry input field (`ProFont` 24pt).
pub const INPUT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Prompt/message text on the text-entry dialog (`ProFont` 18pt).
pub const PROMPT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Prompt text on the white confirmation card.
pub const PROMPT_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, BLACK);

/// Button captions on the white confirmation card.
pub const BUTTON_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, BLACK);
