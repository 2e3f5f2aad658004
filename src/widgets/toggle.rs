//! Toggle switch rendering (track + sliding knob).
//!
//! Purely visual: the switch position comes from the caller (who reads it
//! from the settings store), and hit testing happens at row granularity in
//! the settings screen - tapping anywhere on a toggle row flips it, which is
//! much friendlier to fat fingers than requiring a hit on the 64px switch.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{GREEN, TRACK_GRAY, WHITE};

/// Toggle track width.
pub const TOGGLE_WIDTH: u32 = 64;

/// Toggle track height.
pub const TOGGLE_HEIGHT: u32 = 32;

/// Knob diameter (track height minus a 3px rim on each side).
const KNOB_DIAMETER: u32 = TOGGLE_HEIGHT - 6;

/// Corner radius making the track a pill shape.
const TRACK_RADIUS: Size = Size::new(TOGGLE_HEIGHT / 2, TOGGLE_HEIGHT / 2);

const KNOB_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const TRACK_ON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GREEN);
const TRACK_OFF_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(TRACK_GRAY);

/// Draw a toggle switch with its top-left corner at (`x`, `y`).
///
/// On: green track, knob at the right end. Off: gray track, knob at the left.
pub fn draw_toggle(display: &mut SimulatorDisplay<Rgb565>, x: i32, y: i32, on: bool) {
    let track = Rectangle::new(Point::new(x, y), Size::new(TOGGLE_WIDTH, TOGGLE_HEIGHT));
    RoundedRectangle::with_equal_corners(track, TRACK_RADIUS)
        .into_styled(if on { TRACK_ON_FILL } else { TRACK_OFF_FILL })
        .draw(display)
        .ok();

    let knob_x = if on {
        x + (TOGGLE_WIDTH - KNOB_DIAMETER) as i32 - 3
    } else {
        x + 3
    };
    Circle::new(Point::new(knob_x, y + 3), KNOB_DIAMETER)
        .into_styled(KNOB_FILL)
        .draw(display)
        .ok();
}
