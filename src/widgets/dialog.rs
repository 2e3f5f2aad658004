//! Dialog chrome: text-entry layout and the confirmation card.
//!
//! # Text entry
//!
//! Full-screen dialog on a black background: the prompt/message top-left, a
//! Cancel button top-right, the input field below, and the keyboard anchored
//! to the bottom (drawn separately by [`crate::widgets::keyboard`]).
//!
//! # Confirmation
//!
//! A centered white card over whatever was on screen, word-free prompt text
//! and up to two buttons in the bottom-right corner. Buttons whose label is
//! empty are simply absent - the hit-test helpers below return `false` for
//! them so a tap where the button would be does nothing.
//!
//! # Optimizations Applied
//!
//! - All fixed geometry is `const` (`Rectangle::new` is const fn)
//! - Const `PrimitiveStyle` fills and strokes
//! - Hit testing reuses the same const rectangles the drawing uses

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BLACK, FIELD_GRAY, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_WIDTH};
use crate::session::{ConfirmationSession, TextEntrySession};
use crate::styles::{BUTTON_STYLE_BLACK, CENTERED, INPUT_STYLE_WHITE, LEFT_ALIGNED, PROMPT_STYLE_BLACK, PROMPT_STYLE_WHITE, TITLE_STYLE_WHITE};
use crate::widgets::keyboard::draw_keyboard;

// =============================================================================
// Text Entry Layout Constants (Optimization: computed at compile time)
// =============================================================================

/// Prompt/message baseline position (top-left).
const PROMPT_POS: Point = Point::new(16, 36);

/// Cancel button (top-right corner).
const CANCEL_RECT: Rectangle = Rectangle::new(
    Point::new((SCREEN_WIDTH - 16 - 96) as i32, 10),
    Size::new(96, 36),
);

/// Cancel caption position (center of the button, baseline-adjusted).
const CANCEL_CAPTION_POS: Point = Point::new((SCREEN_WIDTH - 16 - 48) as i32, 35);

/// Input field rectangle, between the prompt line and the keyboard.
const FIELD_RECT: Rectangle = Rectangle::new(Point::new(16, 58), Size::new(SCREEN_WIDTH - 32, 52));

/// Input text baseline inside the field.
const FIELD_TEXT_POS: Point = Point::new(26, 94);

const FIELD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(FIELD_GRAY);
const CANCEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(FIELD_GRAY);

// =============================================================================
// Confirmation Card Layout Constants
// =============================================================================

/// Card dimensions (centered on screen).
const CARD_WIDTH: u32 = 400;
const CARD_HEIGHT: u32 = 190;

const CARD_RECT: Rectangle = Rectangle::new(
    Point::new(CENTER_X - (CARD_WIDTH / 2) as i32, CENTER_Y - (CARD_HEIGHT / 2) as i32),
    Size::new(CARD_WIDTH, CARD_HEIGHT),
);

/// Prompt text position (centered, upper half of the card).
const CARD_PROMPT_POS: Point = Point::new(CENTER_X, CENTER_Y - 30);

/// Card button dimensions.
const CARD_BUTTON_WIDTH: u32 = 130;
const CARD_BUTTON_HEIGHT: u32 = 44;
const CARD_BUTTON_GAP: i32 = 14;

/// Confirm button: bottom-right corner of the card.
const CONFIRM_RECT: Rectangle = Rectangle::new(
    Point::new(
        CENTER_X + (CARD_WIDTH / 2) as i32 - 16 - CARD_BUTTON_WIDTH as i32,
        CENTER_Y + (CARD_HEIGHT / 2) as i32 - 16 - CARD_BUTTON_HEIGHT as i32,
    ),
    Size::new(CARD_BUTTON_WIDTH, CARD_BUTTON_HEIGHT),
);

/// Cancel button: left of the confirm button.
const CARD_CANCEL_RECT: Rectangle = Rectangle::new(
    Point::new(
        CONFIRM_RECT.top_left.x - CARD_BUTTON_GAP - CARD_BUTTON_WIDTH as i32,
        CONFIRM_RECT.top_left.y,
    ),
    Size::new(CARD_BUTTON_WIDTH, CARD_BUTTON_HEIGHT),
);

const CARD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

// =============================================================================
// Text Entry Drawing
// =============================================================================

/// Draw the complete text-entry dialog for the session's current state.
/// The caller clears the display first.
pub fn draw_text_entry(display: &mut SimulatorDisplay<Rgb565>, session: &TextEntrySession) {
    // Prompt or validation message
    Text::with_text_style(session.message(), PROMPT_POS, PROMPT_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Cancel button
    RoundedRectangle::with_equal_corners(CANCEL_RECT, Size::new(8, 8))
        .into_styled(CANCEL_FILL)
        .draw(display)
        .ok();
    Text::with_text_style("Cancel", CANCEL_CAPTION_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    // Input field with the current buffer
    FIELD_RECT.into_styled(FIELD_FILL).draw(display).ok();
    Text::with_text_style(session.text(), FIELD_TEXT_POS, INPUT_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    draw_keyboard(display, session.layout());
}

/// True if a tap at `point` hits the Cancel button.
pub fn cancel_hit(point: Point) -> bool {
    CANCEL_RECT.contains(point)
}

// =============================================================================
// Confirmation Drawing
// =============================================================================

/// Draw the confirmation card and whichever buttons the session has.
pub fn draw_confirmation(display: &mut SimulatorDisplay<Rgb565>, session: &ConfirmationSession) {
    CARD_RECT.into_styled(CARD_FILL).draw(display).ok();

    Text::with_text_style(session.prompt(), CARD_PROMPT_POS, PROMPT_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();

    // Outlined white buttons with black captions, like the head unit's theme
    let button_style = PrimitiveStyleBuilder::new()
        .fill_color(WHITE)
        .stroke_color(BLACK)
        .stroke_width(2)
        .build();

    if session.has_confirm() {
        RoundedRectangle::with_equal_corners(CONFIRM_RECT, Size::new(8, 8))
            .into_styled(button_style)
            .draw(display)
            .ok();
        Text::with_text_style(
            session.confirm_label(),
            button_caption_pos(&CONFIRM_RECT),
            BUTTON_STYLE_BLACK,
            CENTERED,
        )
        .draw(display)
        .ok();
    }

    if session.has_cancel() {
        RoundedRectangle::with_equal_corners(CARD_CANCEL_RECT, Size::new(8, 8))
            .into_styled(button_style)
            .draw(display)
            .ok();
        Text::with_text_style(
            session.cancel_label(),
            button_caption_pos(&CARD_CANCEL_RECT),
            BUTTON_STYLE_BLACK,
            CENTERED,
        )
        .draw(display)
        .ok();
    }
}

/// True if a tap hits the confirm button (and the button exists).
pub fn confirm_button_hit(session: &ConfirmationSession, point: Point) -> bool {
    session.has_confirm() && CONFIRM_RECT.contains(point)
}

/// True if a tap hits the cancel button (and the button exists).
pub fn cancel_button_hit(session: &ConfirmationSession, point: Point) -> bool {
    session.has_cancel() && CARD_CANCEL_RECT.contains(point)
}

/// Caption baseline for a card button (centered, `FONT_10X20`).
fn button_caption_pos(rect: &Rectangle) -> Point {
    Point::new(
        rect.top_left.x + (CARD_BUTTON_WIDTH / 2) as i32,
        rect.top_left.y + (CARD_BUTTON_HEIGHT as i32 + 14) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEYBOARD_Y;

    #[test]
    fn test_field_sits_above_keyboard() {
        let field_bottom = FIELD_RECT.top_left.y + FIELD_RECT.size.height as i32;
        assert!(field_bottom <= KEYBOARD_Y, "input field must not overlap the keyboard");
    }

    #[test]
    fn test_cancel_hit_matches_rect() {
        assert!(cancel_hit(Point::new((SCREEN_WIDTH - 20) as i32, 20)));
        assert!(!cancel_hit(Point::new(20, 20)), "prompt area is not the cancel button");
        assert!(!cancel_hit(Point::new((SCREEN_WIDTH - 20) as i32, 60)));
    }

    #[test]
    fn test_card_buttons_do_not_overlap() {
        let cancel_right = CARD_CANCEL_RECT.top_left.x + CARD_BUTTON_WIDTH as i32;
        assert!(cancel_right < CONFIRM_RECT.top_left.x);
        // Both fit inside the card
        assert!(CARD_CANCEL_RECT.top_left.x > CARD_RECT.top_left.x);
    }

    #[test]
    fn test_absent_button_never_hits() {
        let alert = ConfirmationSession::alert("Done");
        let inside_cancel = Point::new(
            CARD_CANCEL_RECT.top_left.x + 5,
            CARD_CANCEL_RECT.top_left.y + 5,
        );
        assert!(!cancel_button_hit(&alert, inside_cancel), "alert has no cancel button to hit");
        let inside_confirm = Point::new(CONFIRM_RECT.top_left.x + 5, CONFIRM_RECT.top_left.y + 5);
        assert!(confirm_button_hit(&alert, inside_confirm));
    }
}
