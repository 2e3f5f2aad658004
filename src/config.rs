//! Application configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Layout calculations like `SCREEN_HEIGHT - KEYBOARD_HEIGHT` are computed at
//! compile time as `const`, avoiding per-frame arithmetic. These constants are
//! used throughout the rendering code instead of recalculating positions every
//! frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (480x320 head-unit panel, landscape).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). Loops sleep if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Text Entry Configuration
// =============================================================================

/// Maximum number of characters a text-entry buffer can hold.
/// Tokens arriving on a full buffer are dropped; the input field would run
/// off-screen long before this limit.
pub const MAX_INPUT_LEN: usize = 64;

/// Maximum length of a prompt or validation message.
pub const MAX_MESSAGE_LEN: usize = 96;

// =============================================================================
// Settings Page Layout
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 36;

/// Height of each settings row.
pub const ROW_HEIGHT: u32 = 56;

/// Horizontal margin on both sides of row content.
pub const ROW_MARGIN: u32 = 16;

// =============================================================================
// On-Screen Keyboard Layout
// =============================================================================

/// Height of each keyboard key row.
pub const KEY_ROW_HEIGHT: u32 = 48;

/// Number of key rows in every keyboard layout.
pub const KEYBOARD_ROWS: u32 = 4;

/// Total keyboard height (4 rows).
pub const KEYBOARD_HEIGHT: u32 = KEY_ROW_HEIGHT * KEYBOARD_ROWS;

/// Y coordinate of the keyboard's top edge (anchored to the bottom of the
/// screen, as on the real head unit).
pub const KEYBOARD_Y: i32 = (SCREEN_HEIGHT - KEYBOARD_HEIGHT) as i32;

// =============================================================================
// Pre-computed Screen Center (Optimization)
// =============================================================================

/// Screen center X coordinate. Used for centering dialog cards and text.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;
