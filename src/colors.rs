//! RGB565 color palette for the settings UI.
//!
//! Colors follow the head unit's dark theme: black background, gray field and
//! button surfaces, white text. `Rgb565::new` is const fn, so the whole
//! palette lives in the binary's read-only section.
//!
//! Channel values are 5/6/5 bits (0-31, 0-63, 0-31), converted from the
//! original 8-bit theme colors by shifting (`0x44 >> 3`, `0x44 >> 2`, ...).

use embedded_graphics::pixelcolor::Rgb565;

/// Screen background.
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Primary text color.
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Input field and cancel button surface (#444444).
pub const FIELD_GRAY: Rgb565 = Rgb565::new(8, 17, 8);

/// Row button surface (#393939).
pub const BUTTON_GRAY: Rgb565 = Rgb565::new(7, 14, 7);

/// Keyboard key surface and header bar (#222222).
pub const DARK_GRAY: Rgb565 = Rgb565::new(4, 8, 4);

/// Row divider lines and secondary text (#888888).
pub const GRAY: Rgb565 = Rgb565::new(17, 34, 17);

/// Toggle track/knob accent when a toggle is on (#33ab4c).
pub const GREEN: Rgb565 = Rgb565::new(6, 42, 9);

/// Toggle track when off (#545454).
pub const TRACK_GRAY: Rgb565 = Rgb565::new(10, 21, 10);
