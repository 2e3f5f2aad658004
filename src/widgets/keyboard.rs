//! On-screen keyboard rendering and tap hit testing.
//!
//! The key grids themselves live in [`crate::keyboard`]; this module maps
//! them to pixels. Keys in a row share the row's full width proportionally to
//! their weights, so every layout stretches edge to edge regardless of how
//! many keys a row has.
//!
//! Key X edges are computed as `SCREEN_WIDTH * accumulated_weight / total`,
//! which keeps drawing and hit testing bit-identical - a tap inside a drawn
//! key always resolves to that key's token.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::DARK_GRAY;
use crate::config::{KEY_ROW_HEIGHT, KEYBOARD_HEIGHT, KEYBOARD_Y, SCREEN_WIDTH};
use crate::keyboard::Layout;
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

/// Gap between keys (the background shows through and forms the borders).
const KEY_INSET: i32 = 2;

/// Baseline offset that vertically centers `FONT_10X20` captions in a key.
const CAPTION_BASELINE: i32 = (KEY_ROW_HEIGHT as i32 + 14) / 2;

const KEY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_GRAY);

/// Pixel X of a weight boundary within a row.
fn weight_edge(accumulated: u32, total: u32) -> i32 {
    (SCREEN_WIDTH * accumulated / total) as i32
}

/// Draw the keyboard for `layout` anchored at the bottom of the screen.
pub fn draw_keyboard(display: &mut SimulatorDisplay<Rgb565>, layout: Layout) {
    for (row_index, row) in layout.rows().iter().enumerate() {
        let total: u32 = row.iter().map(|k| k.weight).sum();
        let y = KEYBOARD_Y + row_index as i32 * KEY_ROW_HEIGHT as i32;

        let mut accumulated = 0u32;
        for key in row.iter() {
            let x0 = weight_edge(accumulated, total);
            accumulated += key.weight;
            let x1 = weight_edge(accumulated, total);

            // Key surface with a small inset so the background forms gaps
            let width = (x1 - x0 - 2 * KEY_INSET).max(0) as u32;
            let height = KEY_ROW_HEIGHT - 2 * KEY_INSET as u32;
            Rectangle::new(Point::new(x0 + KEY_INSET, y + KEY_INSET), Size::new(width, height))
                .into_styled(KEY_FILL)
                .draw(display)
                .ok();

            Text::with_text_style(
                key.caption,
                Point::new((x0 + x1) / 2, y + CAPTION_BASELINE),
                TITLE_STYLE_WHITE,
                CENTERED,
            )
            .draw(display)
            .ok();
        }
    }
}

/// Resolve a tap to the token of the key under it, if the tap is inside the
/// keyboard area. Gap pixels between keys still resolve to the nearest key -
/// taps on a 2px seam should never be swallowed.
pub fn key_at(layout: Layout, point: Point) -> Option<&'static str> {
    if point.y < KEYBOARD_Y
        || point.y >= KEYBOARD_Y + KEYBOARD_HEIGHT as i32
        || point.x < 0
        || point.x >= SCREEN_WIDTH as i32
    {
        return None;
    }

    let row_index = ((point.y - KEYBOARD_Y) / KEY_ROW_HEIGHT as i32) as usize;
    let row = layout.rows()[row_index];
    let total: u32 = row.iter().map(|k| k.weight).sum();

    let mut accumulated = 0u32;
    for key in row.iter() {
        accumulated += key.weight;
        if point.x < weight_edge(accumulated, total) {
            return Some(key.token);
        }
    }
    // Rounding can leave the last pixel column past the final edge
    row.last().map(|k| k.token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{TOKEN_ACCEPT, TOKEN_BACKSPACE, TOKEN_SHIFT};

    fn row_center_y(row_index: i32) -> i32 {
        KEYBOARD_Y + row_index * KEY_ROW_HEIGHT as i32 + KEY_ROW_HEIGHT as i32 / 2
    }

    #[test]
    fn test_top_left_key_is_q() {
        let point = Point::new(5, row_center_y(0));
        assert_eq!(key_at(Layout::Alphabetic, point), Some("q"));
        assert_eq!(key_at(Layout::Shifted, point), Some("Q"));
        assert_eq!(key_at(Layout::Numeric, point), Some("1"));
        assert_eq!(key_at(Layout::Symbolic, point), Some("["));
    }

    #[test]
    fn test_shift_and_backspace_corners() {
        // Row 3 of the alphabetic grid: shift on the far left, delete far right
        let y = row_center_y(2);
        assert_eq!(key_at(Layout::Alphabetic, Point::new(2, y)), Some(TOKEN_SHIFT));
        assert_eq!(
            key_at(Layout::Alphabetic, Point::new(SCREEN_WIDTH as i32 - 1, y)),
            Some(TOKEN_BACKSPACE),
            "last pixel column must resolve to the last key"
        );
    }

    #[test]
    fn test_bottom_row_space_and_accept() {
        let y = row_center_y(3);
        assert_eq!(key_at(Layout::Alphabetic, Point::new(SCREEN_WIDTH as i32 / 2, y)), Some(" "));
        assert_eq!(
            key_at(Layout::Alphabetic, Point::new(SCREEN_WIDTH as i32 - 5, y)),
            Some(TOKEN_ACCEPT)
        );
    }

    #[test]
    fn test_taps_outside_keyboard_miss() {
        assert_eq!(key_at(Layout::Alphabetic, Point::new(10, KEYBOARD_Y - 1)), None);
        assert_eq!(key_at(Layout::Alphabetic, Point::new(-1, row_center_y(0))), None);
        assert_eq!(
            key_at(Layout::Alphabetic, Point::new(10, KEYBOARD_Y + KEYBOARD_HEIGHT as i32)),
            None
        );
    }

    #[test]
    fn test_every_pixel_resolves_inside_keyboard() {
        // No dead zones: every pixel in the keyboard area must map to a key
        for layout in [Layout::Alphabetic, Layout::Shifted, Layout::Numeric, Layout::Symbolic] {
            for y in (KEYBOARD_Y..KEYBOARD_Y + KEYBOARD_HEIGHT as i32).step_by(7) {
                for x in (0..SCREEN_WIDTH as i32).step_by(7) {
                    assert!(
                        key_at(layout, Point::new(x, y)).is_some(),
                        "dead zone at ({x}, {y}) on {layout:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_hit_order_matches_grid_order() {
        // Scanning left to right across row 1 must yield q..p in order
        let y = row_center_y(0);
        let mut seen: Vec<&str> = Vec::new();
        for x in 0..SCREEN_WIDTH as i32 {
            let token = key_at(Layout::Alphabetic, Point::new(x, y)).unwrap();
            if seen.last() != Some(&token) {
                seen.push(token);
            }
        }
        assert_eq!(seen, ["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"]);
    }
}
