// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Touchscreen settings UI for the in-car dashboard (simulator mode).
//!
//! Presents the dashboard's settings screen: toggle rows and button rows
//! backed by a persistent key-value settings store, with modal dialogs for
//! text entry (on-screen keyboard) and confirmations. Mouse clicks stand in
//! for touch taps; there is no physical keyboard input, exactly like the
//! real head unit.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  SETTINGS                    │  36px header
//! ├──────────────────────────────────────────────┤
//! │ Show FPS counter                     [===o]  │
//! │ Vehicle name                         [EDIT]  │  5 rows x 56px
//! │ Boost warn level (bar)               [SET ]  │
//! │ Reset min/max statistics             [RESET] │
//! │ Firmware version                     v1.2.0  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Tapping EDIT/SET opens a full-screen text-entry dialog whose state machine
//! lives in [`session::text_entry`]; RESET opens a confirmation card. Both
//! dialogs are modal: the main loop is suspended inside
//! [`screens::run_text_entry`] / [`screens::run_confirmation`] until the
//! session resolves, then the accepted value (if any) is written back to the
//! store and the settings page redraws from store state.
//!
//! # State Ownership
//!
//! - Persistent values: [`store::MemoryStore`] (a stand-in for the head
//!   unit's param storage; rows read it every frame, actions write it)
//! - Modal state: one session object per dialog invocation, dropped when the
//!   host returns
//! - The page itself holds only the static row list

mod colors;
mod config;
mod controls;
mod keyboard;
mod screens;
mod session;
mod store;
mod styles;
mod widgets;

use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use colors::BLACK;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use controls::{EntryKind, LabelValue, SettingsEntry, flip_param};
use keyboard::Layout;
use screens::{SettingsPage, run_alert, run_confirmation, run_text_entry};
use session::{ConfirmationSession, TextEntrySession};
use store::{MemoryStore, SettingsStore};

/// Param raised for the dashboard process when the user confirms a stats reset.
const STATS_RESET_PARAM: &str = "StatsResetRequested";

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Dashboard Settings", &output_settings);

    // Seed the store the way the head unit's first boot would
    let mut store = MemoryStore::new();
    store.put_bool("ShowFps", true);
    store.put_string("VehicleName", "Leon Cupra");
    store.put_string("BoostWarnBar", "1.8");

    let page = SettingsPage::new(vec![
        SettingsEntry {
            title: "Show FPS counter",
            kind: EntryKind::Toggle { param: "ShowFps" },
        },
        SettingsEntry {
            title: "Vehicle name",
            kind: EntryKind::TextEntry {
                caption: "EDIT",
                param: "VehicleName",
                prompt: "Enter vehicle name",
                min_length: 1,
            },
        },
        SettingsEntry {
            title: "Boost warn level (bar)",
            kind: EntryKind::NumericEntry {
                caption: "SET",
                param: "BoostWarnBar",
                prompt: "Boost warn level (bar)",
                min: 0.0,
                max: 3.0,
            },
        },
        SettingsEntry {
            title: "Reset min/max statistics",
            kind: EntryKind::Confirm {
                caption: "RESET",
                prompt: "Reset all recorded statistics?",
                request_param: STATS_RESET_PARAM,
            },
        },
        SettingsEntry {
            title: "Firmware version",
            kind: EntryKind::Label {
                value: LabelValue::Static("v1.2.0"),
            },
        },
    ]);

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        // Handle window events (close, taps on rows). Events are collected
        // first because opening a modal dialog needs the window back.
        let events: Vec<SimulatorEvent> = window.events().collect();
        for ev in events {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    let Some(entry) = page.entry_at(point) else {
                        continue;
                    };
                    match &entry.kind {
                        // Tapping anywhere on a toggle row flips the param
                        EntryKind::Toggle { param } => {
                            flip_param(&mut store, param);
                        }

                        // Text entry: seed from the store, write back on accept
                        EntryKind::TextEntry {
                            param, prompt, min_length, ..
                        } => {
                            let session = TextEntrySession::open(prompt)
                                .with_initial_text(&store.get_string(param))
                                .with_min_length(*min_length);
                            if let Some(text) = run_text_entry(&mut display, &mut window, session) {
                                store.put_string(param, &text);
                            }
                        }

                        // Numeric entry: numeric grid, value validated at accept
                        EntryKind::NumericEntry { param, prompt, .. } => {
                            let Some(constraint) = entry.kind.numeric_constraint() else {
                                continue;
                            };
                            let session = TextEntrySession::open(prompt)
                                .with_initial_text(&store.get_string(param))
                                .with_min_length(1)
                                .with_numeric_constraint(constraint)
                                .with_layout(Layout::Numeric);
                            if let Some(text) = run_text_entry(&mut display, &mut window, session) {
                                store.put_string(param, &text);
                            }
                        }

                        // Confirmation: raise the request param only on confirm
                        EntryKind::Confirm {
                            prompt, request_param, ..
                        } => {
                            let session = ConfirmationSession::confirm(prompt);
                            if run_confirmation(&mut display, &mut window, session) {
                                store.put_bool(request_param, true);
                                run_alert(&mut display, &mut window, "Statistics reset on next start");
                            }
                        }

                        // Label rows are inert
                        EntryKind::Label { .. } => {}
                    }
                }
                _ => {}
            }
        }

        // Redraw the page from store state every frame
        display.clear(BLACK).ok();
        page.draw(&mut display, &store);
        window.update(&display);
        thread::sleep(FRAME_TIME);
    }
}
