//! Settings row rendering and hit testing.
//!
//! Every row is `ROW_HEIGHT` tall and spans the full screen width below the
//! header: a title on the left and a right-aligned element (value text,
//! button, or toggle switch). A thin divider line separates rows.
//!
//! # Optimizations Applied
//!
//! - Pre-computed X coordinates for titles and right-aligned elements
//! - Const `PrimitiveStyle` for dividers and button fills
//! - `heapless::String` is not needed here - row titles and captions are
//!   static, and label values arrive as `&str` from the caller

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BUTTON_GRAY, DARK_GRAY};
use crate::config::{HEADER_HEIGHT, ROW_HEIGHT, ROW_MARGIN, SCREEN_WIDTH};
use crate::styles::{CENTERED, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_GRAY, TITLE_STYLE_WHITE};
use crate::widgets::toggle::{TOGGLE_HEIGHT, TOGGLE_WIDTH, draw_toggle};

// =============================================================================
// Row Layout Constants (Optimization: computed at compile time)
// =============================================================================

/// X coordinate of row titles.
const TITLE_X: i32 = ROW_MARGIN as i32;

/// Right edge of row content (value text right-aligns here).
const CONTENT_RIGHT_X: i32 = (SCREEN_WIDTH - ROW_MARGIN) as i32;

/// Row button dimensions.
const BUTTON_WIDTH: u32 = 96;
const BUTTON_HEIGHT: u32 = 36;
const BUTTON_RADIUS: Size = Size::new(10, 10);

/// X coordinate of the row button's left edge (right-aligned).
const BUTTON_X: i32 = (SCREEN_WIDTH - ROW_MARGIN - BUTTON_WIDTH) as i32;

/// X coordinate of the toggle's left edge (right-aligned).
const TOGGLE_X: i32 = (SCREEN_WIDTH - ROW_MARGIN - TOGGLE_WIDTH) as i32;

/// Baseline offset that vertically centers `FONT_10X20` text in a row.
const TEXT_BASELINE: i32 = (ROW_HEIGHT as i32 + 14) / 2;

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DARK_GRAY, 1);
const BUTTON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BUTTON_GRAY);

// =============================================================================
// Row Geometry
// =============================================================================

/// Y coordinate of row `index`'s top edge.
pub const fn row_y(index: usize) -> i32 {
    HEADER_HEIGHT as i32 + (index as u32 * ROW_HEIGHT) as i32
}

/// Which row (if any) a tap at `point` lands on, for a page of `count` rows.
pub fn row_at(point: Point, count: usize) -> Option<usize> {
    if point.y < HEADER_HEIGHT as i32 || point.x < 0 || point.x >= SCREEN_WIDTH as i32 {
        return None;
    }
    let index = ((point.y - HEADER_HEIGHT as i32) / ROW_HEIGHT as i32) as usize;
    (index < count).then_some(index)
}

// =============================================================================
// Row Drawing
// =============================================================================

/// Draw the parts every row shares: title and bottom divider.
fn draw_row_base(display: &mut SimulatorDisplay<Rgb565>, index: usize, title: &str) {
    let y = row_y(index);
    Text::with_text_style(title, Point::new(TITLE_X, y + TEXT_BASELINE), TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let divider_y = y + ROW_HEIGHT as i32 - 1;
    Line::new(Point::new(0, divider_y), Point::new((SCREEN_WIDTH - 1) as i32, divider_y))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

/// Draw a label row: title + right-aligned gray value text.
pub fn draw_label_row(display: &mut SimulatorDisplay<Rgb565>, index: usize, title: &str, value: &str) {
    draw_row_base(display, index, title);
    Text::with_text_style(
        value,
        Point::new(CONTENT_RIGHT_X, row_y(index) + TEXT_BASELINE),
        TITLE_STYLE_GRAY,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}

/// Draw a button row: title + right-aligned rounded button with `caption`.
pub fn draw_button_row(display: &mut SimulatorDisplay<Rgb565>, index: usize, title: &str, caption: &str) {
    draw_row_base(display, index, title);

    let y = row_y(index) + ((ROW_HEIGHT - BUTTON_HEIGHT) / 2) as i32;
    let button = Rectangle::new(Point::new(BUTTON_X, y), Size::new(BUTTON_WIDTH, BUTTON_HEIGHT));
    RoundedRectangle::with_equal_corners(button, BUTTON_RADIUS)
        .into_styled(BUTTON_FILL)
        .draw(display)
        .ok();

    Text::with_text_style(
        caption,
        Point::new(BUTTON_X + (BUTTON_WIDTH / 2) as i32, y + (BUTTON_HEIGHT as i32 + 14) / 2),
        TITLE_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Draw a toggle row: title + right-aligned toggle switch.
pub fn draw_toggle_row(display: &mut SimulatorDisplay<Rgb565>, index: usize, title: &str, on: bool) {
    draw_row_base(display, index, title);
    let y = row_y(index) + ((ROW_HEIGHT - TOGGLE_HEIGHT) / 2) as i32;
    draw_toggle(display, TOGGLE_X, y, on);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_y_stacks_below_header() {
        assert_eq!(row_y(0), HEADER_HEIGHT as i32);
        assert_eq!(row_y(1), (HEADER_HEIGHT + ROW_HEIGHT) as i32);
        assert_eq!(row_y(4), (HEADER_HEIGHT + 4 * ROW_HEIGHT) as i32);
    }

    #[test]
    fn test_row_at_hits() {
        // Top pixel of row 0 and bottom pixel of row 2
        assert_eq!(row_at(Point::new(10, HEADER_HEIGHT as i32), 5), Some(0));
        assert_eq!(row_at(Point::new(10, row_y(3) - 1), 5), Some(2));
        assert_eq!(row_at(Point::new(10, row_y(2) + 5), 5), Some(2));
    }

    #[test]
    fn test_row_at_misses() {
        // Header area, beyond the last row, and off-screen X
        assert_eq!(row_at(Point::new(10, 5), 5), None);
        assert_eq!(row_at(Point::new(10, row_y(5) + 1), 5), None);
        assert_eq!(row_at(Point::new(-1, row_y(0)), 5), None);
        assert_eq!(row_at(Point::new(SCREEN_WIDTH as i32, row_y(0)), 5), None);
    }

    #[test]
    fn test_row_at_empty_page() {
        assert_eq!(row_at(Point::new(10, row_y(0)), 0), None);
    }
}
