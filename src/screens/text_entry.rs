//! Modal text-entry dialog host.
//!
//! Runs a [`TextEntrySession`] synchronously: the call does not return until
//! the session resolves, so callers read like a blocking prompt:
//!
//! ```ignore
//! let session = TextEntrySession::open("Enter vehicle name").with_min_length(1);
//! if let Some(name) = run_text_entry(&mut display, &mut window, session) {
//!     store.put_string("VehicleName", &name);
//! }
//! ```
//!
//! Each frame polls window events, maps taps to the cancel button or to
//! keyboard tokens, feeds them to the session, and redraws. Closing the
//! window cancels, mirroring a dialog's reject-on-close.

use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

use crate::colors::BLACK;
use crate::config::FRAME_TIME;
use crate::session::TextEntrySession;
use crate::widgets::dialog::{cancel_hit, draw_text_entry};
use crate::widgets::keyboard::key_at;

/// Run a text-entry session to completion.
///
/// Returns the accepted text, or `None` when the user cancelled (via the
/// Cancel button or by closing the window).
pub fn run_text_entry(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    mut session: TextEntrySession,
) -> Option<String> {
    loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => session.cancel(),
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if cancel_hit(point) {
                        session.cancel();
                    } else if let Some(token) = key_at(session.layout(), point) {
                        session.handle_token(token);
                    }
                    // Taps elsewhere (prompt, field, dead space) do nothing
                }
                _ => {}
            }
        }

        if session.is_terminal() {
            return session.result().map(str::to_owned);
        }

        display.clear(BLACK).ok();
        draw_text_entry(display, &session);
        window.update(display);
        thread::sleep(FRAME_TIME);
    }
}
