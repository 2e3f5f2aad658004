//! The settings page: header bar plus a column of settings rows.
//!
//! The page owns the row list and knows how to draw itself against the
//! current store state and how to resolve a tap to a row index. What a tap
//! *does* is decided by the caller (`main`), which keeps this screen free of
//! store writes and modal recursion.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::DARK_GRAY;
use crate::config::{CENTER_X, HEADER_HEIGHT, SCREEN_WIDTH};
use crate::controls::{EntryKind, SettingsEntry, label_text};
use crate::store::SettingsStore;
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};
use crate::widgets::rows::{draw_button_row, draw_label_row, draw_toggle_row, row_at};

// =============================================================================
// Header Layout Constants
// =============================================================================

const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));
const HEADER_TITLE_POS: Point = Point::new(CENTER_X, 25);
const HEADER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_GRAY);

// =============================================================================
// Settings Page
// =============================================================================

/// The list of rows shown on the settings screen.
pub struct SettingsPage {
    entries: Vec<SettingsEntry>,
}

impl SettingsPage {
    /// Build a page from its rows (top to bottom).
    pub fn new(entries: Vec<SettingsEntry>) -> Self {
        Self { entries }
    }

    /// Draw the header and every row against the current store state.
    /// Toggle positions and label values are read fresh each frame so the
    /// page always reflects the store.
    pub fn draw(&self, display: &mut SimulatorDisplay<Rgb565>, store: &dyn SettingsStore) {
        HEADER_RECT.into_styled(HEADER_FILL).draw(display).ok();
        Text::with_text_style("SETTINGS", HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();

        for (index, entry) in self.entries.iter().enumerate() {
            match &entry.kind {
                EntryKind::Label { value } => {
                    draw_label_row(display, index, entry.title, &label_text(*value, store));
                }
                EntryKind::Toggle { param } => {
                    draw_toggle_row(display, index, entry.title, store.get_bool(param));
                }
                EntryKind::TextEntry { caption, .. }
                | EntryKind::NumericEntry { caption, .. }
                | EntryKind::Confirm { caption, .. } => {
                    draw_button_row(display, index, entry.title, caption);
                }
            }
        }
    }

    /// Resolve a tap to the row under it.
    pub fn entry_at(&self, point: Point) -> Option<&SettingsEntry> {
        row_at(point, self.entries.len()).map(|index| &self.entries[index])
    }
}
