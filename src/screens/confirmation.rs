//! Modal confirmation/alert dialog host.
//!
//! Same blocking pattern as the text-entry host: the call returns once the
//! user taps a button (or closes the window, which counts as "not
//! confirmed"). The card is drawn as an overlay - the caller's last frame
//! stays visible around it, like the dashboard's status popups.

use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

use crate::config::FRAME_TIME;
use crate::session::ConfirmationSession;
use crate::widgets::dialog::{cancel_button_hit, confirm_button_hit, draw_confirmation};

/// Run a confirmation session to completion. Returns true iff confirmed.
pub fn run_confirmation(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    mut session: ConfirmationSession,
) -> bool {
    loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => session.resolve_rejected(),
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if confirm_button_hit(&session, point) {
                        session.resolve_confirmed();
                    } else if cancel_button_hit(&session, point) {
                        session.resolve_rejected();
                    }
                }
                _ => {}
            }
        }

        if let Some(confirmed) = session.resolution() {
            return confirmed;
        }

        draw_confirmation(display, &session);
        window.update(display);
        thread::sleep(FRAME_TIME);
    }
}

/// Single-button acknowledge prompt. Blocks until dismissed.
pub fn run_alert(display: &mut SimulatorDisplay<Rgb565>, window: &mut Window, prompt: &'static str) {
    run_confirmation(display, window, ConfirmationSession::alert(prompt));
}
